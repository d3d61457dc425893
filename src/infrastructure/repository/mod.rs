//! Repository adapters.

pub mod inmemory;

pub use inmemory::{InMemoryConnectionRegistry, InMemoryRoomStore};
