//! In-memory repository implementations backed by `Mutex<HashMap>`.
//!
//! Single-process deployment is the assumed model, so in-memory state is the
//! only storage tier. Each store serializes its own mutations through one
//! lock; cross-store consistency for room membership is the session gate's
//! job in the usecase layer.

mod connection;
mod room;

pub use connection::InMemoryConnectionRegistry;
pub use room::InMemoryRoomStore;
