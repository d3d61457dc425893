//! Domain entities: connections and rooms.

use serde::Serialize;

use super::value_object::{ConnectionId, RoomId, Timestamp, UserId, Username};

/// One live client transport session.
///
/// Created when the transport connects, destroyed on disconnect. The room id
/// and identity fields are set by the session usecases on join and cleared on
/// leave; no other component mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: ConnectionId,
    pub room_id: Option<RoomId>,
    pub username: Option<Username>,
    pub user_id: Option<UserId>,
    pub connected_at: Timestamp,
}

impl Connection {
    /// Create a fresh, unauthenticated connection.
    pub fn new(id: ConnectionId, connected_at: Timestamp) -> Self {
        Self {
            id,
            room_id: None,
            username: None,
            user_id: None,
            connected_at,
        }
    }

    /// Attach the identity claimed on join.
    pub fn attach_identity(&mut self, username: Username, user_id: Option<UserId>) {
        self.username = Some(username);
        self.user_id = user_id;
    }

    pub fn set_room(&mut self, room_id: RoomId) {
        self.room_id = Some(room_id);
    }

    pub fn clear_room(&mut self) {
        self.room_id = None;
    }

    /// Whether this connection is currently recorded as being in `room_id`.
    pub fn is_in(&self, room_id: &RoomId) -> bool {
        self.room_id.as_ref() == Some(room_id)
    }
}

/// A named session grouping connections for chat and video negotiation.
///
/// Participants are display names; insertion order is preserved for the
/// `room-participants` list clients render. Rooms are never deleted when they
/// become empty; they persist until process restart so a shared link stays
/// valid while everyone is between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub created_by: String,
    pub created_at: Timestamp,
    pub participants: Vec<Username>,
}

impl Room {
    pub fn new(id: RoomId, name: String, created_by: String, created_at: Timestamp) -> Self {
        Self {
            id,
            name,
            created_by,
            created_at,
            participants: Vec::new(),
        }
    }

    /// Add a participant. Idempotent: a name appears at most once even if
    /// join is delivered twice for the same connection.
    ///
    /// Returns `true` if the participant was newly added.
    pub fn add_participant(&mut self, name: Username) -> bool {
        if self.participants.contains(&name) {
            return false;
        }
        self.participants.push(name);
        true
    }

    /// Remove a participant. No-op when the name is absent.
    ///
    /// Returns `true` if the participant was present.
    pub fn remove_participant(&mut self, name: &Username) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != name);
        self.participants.len() != before
    }
}
