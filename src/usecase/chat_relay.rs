//! UseCase: relay a chat message to a room, with bot participation.

use std::sync::Arc;

use crate::common::time::Clock;
use crate::domain::{
    ConnectionId, ConnectionRegistry, MessagePusher, MessageResponder, RoomId, ServerEvent,
    Timestamp, UserId, Username,
};

/// Prefix that addresses a chat message to the bot as a command.
pub const COMMAND_PREFIX: char = '.';

/// Chat relay.
///
/// Routing is either/or: text starting with the command prefix goes to the
/// bot and only the bot's replies reach the room, tagged `isBot`; any other
/// text is broadcast verbatim to every member, sender included. Both paths
/// stamp a server-side timestamp.
pub struct ChatRelayUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn MessagePusher>,
    responder: Arc<dyn MessageResponder>,
    clock: Arc<dyn Clock>,
}

impl ChatRelayUseCase {
    pub fn new(
        registry: Arc<dyn ConnectionRegistry>,
        pusher: Arc<dyn MessagePusher>,
        responder: Arc<dyn MessageResponder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            pusher,
            responder,
            clock,
        }
    }

    pub async fn execute(
        &self,
        conn_id: &ConnectionId,
        room_id: RoomId,
        username: Username,
        text: String,
        user_id: Option<UserId>,
    ) {
        let members = self.registry.connections_in_room(&room_id).await;
        if members.is_empty() {
            // Stale room id from a client that already left. Not an error.
            tracing::debug!(
                "Dropping chat from '{}': room '{}' has no connections",
                conn_id,
                room_id
            );
            return;
        }

        if text.trim_start().starts_with(COMMAND_PREFIX) {
            // Command path: the command itself is not echoed to the room.
            let replies = self.responder.respond(&room_id, &username, &text).await;
            for reply in replies {
                let bot_message = ServerEvent::ChatMessage {
                    username: self.responder.display_name().to_string(),
                    text: reply.text,
                    timestamp: Timestamp::new(self.clock.now_utc_millis()),
                    user_id: None,
                    is_bot: Some(true),
                };
                if let Err(e) = self
                    .pusher
                    .broadcast(members.clone(), &bot_message.to_json())
                    .await
                {
                    tracing::warn!("Failed to broadcast bot reply: {}", e);
                }
            }
            return;
        }

        let message = ServerEvent::ChatMessage {
            username: username.to_string(),
            text,
            timestamp: Timestamp::new(self.clock.now_utc_millis()),
            user_id,
            is_bot: None,
        };
        if let Err(e) = self.pusher.broadcast(members, &message.to_json()).await {
            tracing::warn!("Failed to broadcast chat-message: {}", e);
        }
    }
}
