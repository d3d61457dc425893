//! Data Transfer Objects, organized by protocol:
//! - `ws`: WebSocket event DTOs (inbound, validated at the boundary)
//! - `http`: HTTP API request/response DTOs

pub mod http;
pub mod ws;
