//! WebSocket-backed `MessagePusher` implementation.
//!
//! The WebSocket itself is created in the UI layer
//! (`src/ui/handler/websocket.rs`); this adapter holds the per-connection
//! sender halves and pushes serialized events into them. The channels are
//! bounded and sends use `try_send`: when a connection's queue is full the
//! new message is dropped for that connection only (drop-new policy), so one
//! stalled peer never blocks delivery to the rest of the room.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::sync::mpsc::error::TrySendError;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel};

/// Capacity of each connection's outbound queue.
pub const OUTBOUND_QUEUE_CAPACITY: usize = 256;

/// WebSocket `MessagePusher` holding the sender map.
pub struct WebSocketMessagePusher {
    /// Outbound channel per connected client.
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn try_push(conn_id: &ConnectionId, sender: &PusherChannel, content: &str) -> Result<(), MessagePushError> {
        match sender.try_send(content.to_string()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                tracing::warn!(
                    "Outbound queue full for connection '{}', dropping message",
                    conn_id
                );
                Err(MessagePushError::PushFailed("queue full".to_string()))
            }
            Err(TrySendError::Closed(_)) => Err(MessagePushError::PushFailed(
                "channel closed".to_string(),
            )),
        }
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, conn_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(conn_id.clone(), sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", conn_id);
    }

    async fn unregister_client(&self, conn_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(conn_id);
        tracing::debug!("Connection '{}' unregistered from MessagePusher", conn_id);
    }

    async fn push_to(&self, conn_id: &ConnectionId, content: &str) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        if let Some(sender) = clients.get(conn_id) {
            Self::try_push(conn_id, sender, content)?;
            tracing::debug!("Pushed message to connection '{}'", conn_id);
            Ok(())
        } else {
            Err(MessagePushError::ConnectionNotFound(
                conn_id.as_str().to_string(),
            ))
        }
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        for target in targets {
            if let Some(sender) = clients.get(&target) {
                // Partial failure is tolerated during broadcast
                if let Err(e) = Self::try_push(&target, sender, content) {
                    tracing::warn!("Failed to push message to connection '{}': {}", target, e);
                }
            } else {
                tracing::warn!("Connection '{}' not found during broadcast, skipping", target);
            }
        }

        Ok(())
    }
}
