//! UseCase: relay a WebRTC signaling payload to one peer.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{ConnectionId, ConnectionRegistry, MessagePusher, ServerEvent};

/// The three signaling payload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Offer,
    Answer,
    IceCandidate,
}

impl SignalKind {
    fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Offer => "offer",
            SignalKind::Answer => "answer",
            SignalKind::IceCandidate => "ice-candidate",
        }
    }
}

/// Stateless signaling router.
///
/// Forwards the opaque payload to the target connection, annotated with the
/// sender's connection id so the receiver can answer. A missing target is an
/// expected race during WebRTC negotiation (the peer disconnected), so the
/// event is dropped silently; it never affects other pending relays.
pub struct RelaySignalUseCase {
    registry: Arc<dyn ConnectionRegistry>,
    pusher: Arc<dyn MessagePusher>,
}

impl RelaySignalUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<dyn MessagePusher>) -> Self {
        Self { registry, pusher }
    }

    pub async fn execute(
        &self,
        kind: SignalKind,
        payload: Value,
        from: &ConnectionId,
        to: &ConnectionId,
    ) {
        if self.registry.lookup(to).await.is_none() {
            tracing::debug!(
                "Dropping {} from '{}': target '{}' not connected",
                kind.as_str(),
                from,
                to
            );
            return;
        }

        let event = match kind {
            SignalKind::Offer => ServerEvent::Offer {
                offer: payload,
                from: from.clone(),
            },
            SignalKind::Answer => ServerEvent::Answer {
                answer: payload,
                from: from.clone(),
            },
            SignalKind::IceCandidate => ServerEvent::IceCandidate {
                candidate: payload,
                from: from.clone(),
            },
        };

        if let Err(e) = self.pusher.push_to(to, &event.to_json()).await {
            // The target vanished between lookup and push; same race, same policy.
            tracing::debug!("Dropping {} to '{}': {}", kind.as_str(), to, e);
        }
    }
}
