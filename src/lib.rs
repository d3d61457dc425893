//! WebRTC signaling and room relay server library.
//!
//! This library implements the server side of a video-conferencing
//! application: room membership tracking, offer/answer/ICE-candidate relay
//! between peers, and chat broadcast (including bot commands) over WebSocket.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
