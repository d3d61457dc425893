//! UseCase: look up one room.

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomStore};

use super::error::GetRoomDetailError;

/// Single-room lookup for the directory API.
pub struct GetRoomDetailUseCase {
    room_store: Arc<dyn RoomStore>,
}

impl GetRoomDetailUseCase {
    pub fn new(room_store: Arc<dyn RoomStore>) -> Self {
        Self { room_store }
    }

    /// A syntactically invalid room id can never name a room, so it reports
    /// the same not-found as an unknown id.
    pub async fn execute(&self, raw_room_id: &str) -> Result<Room, GetRoomDetailError> {
        let room_id = RoomId::new(raw_room_id.to_string())
            .map_err(|_| GetRoomDetailError::RoomNotFound)?;
        self.room_store
            .get_room(&room_id)
            .await
            .ok_or(GetRoomDetailError::RoomNotFound)
    }
}
