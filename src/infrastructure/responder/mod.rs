//! Bot responder adapters.

pub mod command_bot;

pub use command_bot::CommandBot;
