//! Bot collaborator port.
//!
//! Chat text starting with the command prefix is handed to a
//! `MessageResponder`; whatever it returns is broadcast to the room tagged as
//! bot-originated. The relay core never interprets the text itself.

use async_trait::async_trait;

use super::value_object::{RoomId, Username};

/// One outgoing bot message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    pub text: String,
}

impl BotReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Produces zero or more replies to a chat message addressed to the bot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageResponder: Send + Sync {
    /// The bot's display name, used as the `username` of its broadcasts.
    fn display_name(&self) -> &str;

    async fn respond(&self, room_id: &RoomId, sender: &Username, text: &str) -> Vec<BotReply>;
}
