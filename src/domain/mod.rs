//! Domain layer: value objects, entities and the port traits the
//! usecase layer depends on. Concrete adapters live in the
//! infrastructure layer (dependency inversion).

pub mod auth;
pub mod entity;
pub mod event;
pub mod pusher;
pub mod repository;
pub mod responder;
pub mod value_object;

pub use auth::{AuthError, AuthProvider, AuthenticatedUser, NewUser};
pub use entity::{Connection, Room};
pub use event::ServerEvent;
pub use pusher::{MessagePushError, MessagePusher, PusherChannel};
pub use repository::{ConnectionRegistry, RoomStore, RoomStoreError};
pub use responder::{BotReply, MessageResponder};
pub use value_object::{
    ConnectionId, MessageText, RoomId, RoomIdFactory, Timestamp, UserId, Username,
    ValidationError,
};
