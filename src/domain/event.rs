//! Outbound events produced by the relay core.
//!
//! These are serialized under the session gate so that every member of a room
//! observes membership changes in the order they were processed. The variants
//! map one-to-one onto the wire `type` tags clients dispatch on.

use serde::Serialize;
use serde_json::Value;

use super::value_object::{ConnectionId, Timestamp, UserId, Username};

/// Event pushed to one or many connections.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// A participant joined the room (sent to the other members).
    #[serde(rename_all = "camelCase")]
    UserConnected {
        username: Username,
        #[serde(skip_serializing_if = "Option::is_none")]
        user_id: Option<UserId>,
    },
    /// A participant left the room (sent to the remaining members).
    UserLeft { username: Username },
    /// Full participant list, re-broadcast on every membership change.
    RoomParticipants { participants: Vec<Username> },
    /// WebRTC offer relayed to one peer; payload is opaque.
    Offer { offer: Value, from: ConnectionId },
    /// WebRTC answer relayed to one peer; payload is opaque.
    Answer { answer: Value, from: ConnectionId },
    /// ICE candidate relayed to one peer; payload is opaque.
    IceCandidate { candidate: Value, from: ConnectionId },
    /// Chat message broadcast to every member of the room.
    #[serde(rename_all = "camelCase")]
    ChatMessage {
        username: String,
        text: String,
        timestamp: Timestamp,
        #[serde(skip_serializing_if = "Option::is_none")]
        user_id: Option<UserId>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_bot: Option<bool>,
    },
    /// Error reported to the offending connection only.
    Error { message: String },
}

impl ServerEvent {
    /// Serialize for the wire.
    pub fn to_json(&self) -> String {
        // Serialization of these variants cannot fail: no non-string map keys
        // and no custom serializers.
        serde_json::to_string(self).expect("event serialization is infallible")
    }
}
