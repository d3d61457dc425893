//! Infrastructure layer: concrete adapters for the domain ports plus the
//! DTOs spoken over WebSocket and HTTP.

pub mod auth;
pub mod dto;
pub mod message_pusher;
pub mod repository;
pub mod responder;
