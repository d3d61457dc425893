//! UseCase: transport disconnect.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, MessagePusher};

use super::leave_room::LeaveRoomUseCase;

/// Disconnect path of the room session manager.
///
/// A transport-level disconnect synthesizes a leave from the registry's own
/// last-known room and username, then removes the connection. Leave runs
/// before removal so the room notifications can still reference the prior
/// state; the removal itself is idempotent.
pub struct DisconnectUseCase {
    leave: Arc<LeaveRoomUseCase>,
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn MessagePusher>,
}

impl DisconnectUseCase {
    pub fn new(
        leave: Arc<LeaveRoomUseCase>,
        registry: Arc<dyn ConnectionRegistry>,
        pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            leave,
            registry,
            pusher,
        }
    }

    pub async fn execute(&self, conn_id: &ConnectionId) {
        // Synthesized leave: registry state only, no caller-supplied claims.
        let was_in_room = self.leave.execute(conn_id, None, None).await;

        self.registry.remove(conn_id).await;
        self.pusher.unregister_client(conn_id).await;

        tracing::info!(
            "Connection '{}' disconnected (was in a room: {})",
            conn_id,
            was_in_room
        );
    }
}
