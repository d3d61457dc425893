//! UseCase: leave a room.

use std::sync::Arc;

use crate::domain::{
    ConnectionId, ConnectionRegistry, MessagePusher, RoomId, RoomStore, ServerEvent, Username,
};

use super::session_gate::SessionGate;

/// Leave path of the room session manager.
///
/// The registry is authoritative: the room and username actually used are the
/// ones recorded for the connection, never the values the leave event claims.
/// A leave from a connection that is not in a room is a no-op, not an error,
/// because disconnects race with explicit leaves.
pub struct LeaveRoomUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    room_store: Arc<dyn RoomStore>,
    pusher: Arc<dyn MessagePusher>,
    gate: Arc<SessionGate>,
}

impl LeaveRoomUseCase {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        room_store: Arc<dyn RoomStore>,
        pusher: Arc<dyn MessagePusher>,
        gate: Arc<SessionGate>,
    ) -> Self {
        Self {
            registry,
            room_store,
            pusher,
            gate,
        }
    }

    /// Execute the leave. Returns `true` when the connection actually left a
    /// room (and the remaining members were notified).
    pub async fn execute(
        &self,
        conn_id: &ConnectionId,
        claimed_room: Option<&RoomId>,
        claimed_username: Option<&Username>,
    ) -> bool {
        let _guard = self.gate.acquire().await;

        let Some(conn) = self.registry.lookup(conn_id).await else {
            return false;
        };
        let (Some(room_id), Some(username)) = (conn.room_id, conn.username) else {
            // Idle connection: nothing to do, zero broadcasts.
            return false;
        };

        if let Some(claimed) = claimed_room
            && claimed != &room_id
        {
            tracing::warn!(
                "Leave from '{}' claimed room '{}' but registry records '{}'; using registry",
                conn_id,
                claimed,
                room_id
            );
        }
        if let Some(claimed) = claimed_username
            && claimed != &username
        {
            tracing::warn!(
                "Leave from '{}' claimed username '{}' but registry records '{}'; using registry",
                conn_id,
                claimed,
                username
            );
        }

        self.registry.clear_room(conn_id).await;
        self.room_store.remove_participant(&room_id, &username).await;

        // The leaver is no longer addressable; notify the remaining members only.
        let remaining = self.registry.connections_in_room(&room_id).await;

        let left = ServerEvent::UserLeft {
            username: username.clone(),
        };
        if let Err(e) = self.pusher.broadcast(remaining.clone(), &left.to_json()).await {
            tracing::warn!("Failed to broadcast user-left: {}", e);
        }

        let participants = match self.room_store.get_room(&room_id).await {
            Some(room) => room.participants,
            None => Vec::new(),
        };
        let list = ServerEvent::RoomParticipants { participants };
        if let Err(e) = self.pusher.broadcast(remaining, &list.to_json()).await {
            tracing::warn!("Failed to broadcast room-participants: {}", e);
        }

        tracing::info!("'{}' left room '{}'", username, room_id);
        true
    }
}
