//! Message delivery adapters.

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
