//! UseCase: join a room.

use std::sync::Arc;

use crate::common::time::get_utc_timestamp;
use crate::domain::{
    ConnectionId, ConnectionRegistry, MessagePusher, RoomId, RoomStore, ServerEvent, Timestamp,
    UserId, Username,
};

use super::error::JoinError;
use super::session_gate::SessionGate;

/// Join path of the room session manager.
///
/// On success the joiner's identity and room are recorded, the participant
/// set is updated idempotently, the other members receive `user-connected`
/// and every member (joiner included) receives the full updated
/// `room-participants` list. Re-broadcasting the entire list on every change
/// trades bandwidth for simplicity; clients converge without diff handling.
pub struct JoinRoomUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    room_store: Arc<dyn RoomStore>,
    pusher: Arc<dyn MessagePusher>,
    gate: Arc<SessionGate>,
}

impl JoinRoomUseCase {
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

    /// Execute the join.
    ///
    /// Fails with [`JoinError::RoomNotFound`] when the room was never created
    /// over the directory API; nothing is mutated in that case and the error
    /// is reported to the joining connection only.
    pub async fn execute(
        &self,
        conn_id: &ConnectionId,
        room_id: RoomId,
        username: Username,
        user_id: Option<UserId>,
    ) -> Result<Vec<Username>, JoinError> {
        let _guard = self.gate.acquire().await;

        // Join never silently creates a room.
        if self.room_store.get_room(&room_id).await.is_none() {
            return Err(JoinError::RoomNotFound);
        }

        // A connection belongs to at most one room: switching rooms without
        // an explicit leave detaches it from the previous one first.
        if let Some(conn) = self.registry.lookup(conn_id).await
            && let (Some(prev_room), Some(prev_name)) = (conn.room_id, conn.username)
            && prev_room != room_id
        {
            tracing::debug!(
                "Connection '{}' joining '{}' while still in '{}', leaving first",
                conn_id,
                room_id,
                prev_room
            );
            self.registry.clear_room(conn_id).await;
            self.room_store.remove_participant(&prev_room, &prev_name).await;
            self.notify_left(&prev_room, &prev_name).await;
        }

        self.registry
            .attach_identity(conn_id, username.clone(), user_id.clone())
            .await;
        self.registry.set_room(conn_id, room_id.clone()).await;
        self.room_store
            .add_participant(&room_id, username.clone())
            .await
            .map_err(|_| JoinError::RoomNotFound)?;

        let participants = match self.room_store.get_room(&room_id).await {
            Some(room) => room.participants,
            None => Vec::new(),
        };

        let members = self.registry.connections_in_room(&room_id).await;
        let others: Vec<ConnectionId> =
            members.iter().filter(|id| *id != conn_id).cloned().collect();

        let joined = ServerEvent::UserConnected {
            username: username.clone(),
            user_id,
        };
        if let Err(e) = self.pusher.broadcast(others, &joined.to_json()).await {
            tracing::warn!("Failed to broadcast user-connected: {}", e);
        }

        let list = ServerEvent::RoomParticipants {
            participants: participants.clone(),
        };
        if let Err(e) = self.pusher.broadcast(members, &list.to_json()).await {
            tracing::warn!("Failed to broadcast room-participants: {}", e);
        }

        tracing::info!("'{}' joined room '{}'", username, room_id);
        Ok(participants)
    }

    async fn notify_left(&self, room_id: &RoomId, username: &Username) {
        let remaining = self.registry.connections_in_room(room_id).await;
        let left = ServerEvent::UserLeft {
            username: username.clone(),
        };
        if let Err(e) = self.pusher.broadcast(remaining.clone(), &left.to_json()).await {
            tracing::warn!("Failed to broadcast user-left: {}", e);
        }

        let participants = match self.room_store.get_room(room_id).await {
            Some(room) => room.participants,
            None => Vec::new(),
        };
        let list = ServerEvent::RoomParticipants { participants };
        if let Err(e) = self.pusher.broadcast(remaining, &list.to_json()).await {
            tracing::warn!("Failed to broadcast room-participants: {}", e);
        }
    }

    /// Register a freshly connected transport session.
    pub async fn register_connection(&self, conn_id: ConnectionId) {
        self.registry
            .register(conn_id, Timestamp::new(get_utc_timestamp()))
            .await;
    }
}
