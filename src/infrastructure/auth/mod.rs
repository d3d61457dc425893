//! Auth provider adapters.

pub mod inmemory;

pub use inmemory::InMemoryAuthProvider;
