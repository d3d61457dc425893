//! Inbound WebSocket event DTOs.
//!
//! Every inbound frame must parse into exactly one `ClientEvent` variant;
//! a frame that does not (unknown `type`, missing required field) is rejected
//! for that single event with no state mutation and no broadcast. Signaling
//! payloads stay `serde_json::Value`; the server never inspects them.

use serde::Deserialize;
use serde_json::Value;

/// Chat message body as sent by clients.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatBody {
    pub text: String,
}

/// One inbound event from a connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Join a room. The room must already exist (created over HTTP).
    #[serde(rename_all = "camelCase")]
    Join {
        room_id: String,
        username: String,
        #[serde(default)]
        user_id: Option<String>,
    },
    /// Leave a room. The registry's recorded state is authoritative; the
    /// claimed fields are only used for mismatch diagnostics.
    #[serde(rename_all = "camelCase")]
    Leave { room_id: String, username: String },
    /// WebRTC offer for one target connection.
    #[serde(rename_all = "camelCase")]
    Offer {
        offer: Value,
        room_id: String,
        to: String,
    },
    /// WebRTC answer for one target connection.
    #[serde(rename_all = "camelCase")]
    Answer {
        answer: Value,
        room_id: String,
        to: String,
    },
    /// ICE candidate for one target connection.
    #[serde(rename_all = "camelCase")]
    IceCandidate {
        candidate: Value,
        room_id: String,
        to: String,
    },
    /// Chat text for the sender's room.
    #[serde(rename_all = "camelCase")]
    ChatMessage {
        room_id: String,
        message: ChatBody,
        username: String,
        #[serde(default)]
        user_id: Option<String>,
    },
}
