//! Usecase layer: one struct per operation, constructor-injected ports.
//!
//! The join/leave/disconnect usecases together form the room session manager:
//! they are the only components that mutate room membership, and they
//! serialize those mutations through the shared [`SessionGate`].

mod chat_relay;
mod create_room;
mod disconnect;
mod error;
mod get_room_detail;
mod get_rooms;
mod join_room;
mod leave_room;
mod relay_signal;
mod session_gate;

pub use chat_relay::ChatRelayUseCase;
pub use create_room::CreateRoomUseCase;
pub use disconnect::DisconnectUseCase;
pub use error::{CreateRoomError, GetRoomDetailError, JoinError};
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use relay_signal::{RelaySignalUseCase, SignalKind};
pub use session_gate::SessionGate;
