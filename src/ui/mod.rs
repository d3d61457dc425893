//! WebSocket signaling server and HTTP room directory.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
