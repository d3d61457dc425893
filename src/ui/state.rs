//! Server state and connection management.

use std::sync::Arc;

use crate::domain::{AuthProvider, MessagePusher};
use crate::usecase::{
    ChatRelayUseCase, CreateRoomUseCase, DisconnectUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
    JoinRoomUseCase, LeaveRoomUseCase, RelaySignalUseCase,
};

/// Shared application state
pub struct AppState {
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    pub disconnect_usecase: Arc<DisconnectUseCase>,
    pub relay_signal_usecase: Arc<RelaySignalUseCase>,
    pub chat_relay_usecase: Arc<ChatRelayUseCase>,
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    pub auth_provider: Arc<dyn AuthProvider>,
    /// MessagePusher, used by the WebSocket handler to register the
    /// per-connection outbound channel and to report boundary errors.
    pub message_pusher: Arc<dyn MessagePusher>,
}
