//! Port traits for the shared state the relay core drives.
//!
//! The usecase layer depends on these traits only; the in-memory adapters in
//! the infrastructure layer provide the synchronization (dependency
//! inversion, same arrangement as the room repository in the chat core this
//! server grew out of).

use async_trait::async_trait;
use thiserror::Error;

use super::entity::{Connection, Room};
use super::value_object::{ConnectionId, RoomId, Timestamp, UserId, Username};

/// Errors surfaced by the room store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomStoreError {
    #[error("room not found")]
    RoomNotFound,
}

/// Registry of live connections: connection id to connection metadata.
///
/// Mutations of `room_id`/identity happen only through the session usecases.
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Register a fresh, unauthenticated connection.
    async fn register(&self, id: ConnectionId, connected_at: Timestamp) -> Connection;

    /// Attach the identity claimed on join to an existing connection.
    async fn attach_identity(&self, id: &ConnectionId, username: Username, user_id: Option<UserId>);

    /// Record that the connection is now in `room_id`.
    async fn set_room(&self, id: &ConnectionId, room_id: RoomId);

    /// Clear the connection's room membership.
    async fn clear_room(&self, id: &ConnectionId);

    /// Look up a connection snapshot, or `None` if it is not registered.
    async fn lookup(&self, id: &ConnectionId) -> Option<Connection>;

    /// Remove a connection. Idempotent: removing twice or removing an unknown
    /// id is a no-op, because disconnects race with explicit leaves.
    async fn remove(&self, id: &ConnectionId);

    /// All connection ids currently recorded as being in `room_id`.
    async fn connections_in_room(&self, room_id: &RoomId) -> Vec<ConnectionId>;

    /// Number of registered connections.
    async fn count(&self) -> usize;
}

/// Store of rooms: room id to room state.
///
/// Rooms are created by an explicit create action and persist until process
/// restart; a room with zero participants is never deleted.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Create a room with a generated short id and empty participant set.
    ///
    /// On the (unlikely) event of an id collision the implementation must
    /// regenerate rather than overwrite an existing room.
    async fn create_room(&self, name: String, created_by: String, created_at: Timestamp) -> Room;

    /// Read-only snapshots of all rooms, in insertion order.
    async fn list_rooms(&self) -> Vec<Room>;

    /// Snapshot of one room, or `None` if the id is unknown.
    async fn get_room(&self, id: &RoomId) -> Option<Room>;

    /// Add a participant to a room. Idempotent when the name is present.
    async fn add_participant(&self, id: &RoomId, name: Username) -> Result<(), RoomStoreError>;

    /// Remove a participant from a room. No-op when the name or room is absent.
    async fn remove_participant(&self, id: &RoomId, name: &Username);
}
