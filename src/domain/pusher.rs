//! Outbound message delivery port.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::value_object::ConnectionId;

/// Per-connection outbound channel handle.
///
/// Bounded: one slow or stalled peer must not stall broadcasts to others, so
/// sends go through `try_send` and a full queue drops the new message for
/// that connection only (drop-new policy, applied uniformly).
pub type PusherChannel = mpsc::Sender<String>;

/// Errors surfaced when pushing a message to a connection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessagePushError {
    #[error("connection '{0}' not found")]
    ConnectionNotFound(String),
    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// Abstraction over delivering serialized events to connections.
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a connection's outbound channel.
    async fn register_client(&self, conn_id: ConnectionId, sender: PusherChannel);

    /// Unregister a connection's outbound channel.
    async fn unregister_client(&self, conn_id: &ConnectionId);

    /// Push a message to one connection.
    async fn push_to(&self, conn_id: &ConnectionId, content: &str) -> Result<(), MessagePushError>;

    /// Push a message to each target connection. Partial failure is
    /// tolerated: a missing or saturated target is skipped, the rest still
    /// receive the message.
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
