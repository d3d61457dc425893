//! UseCase: create a room.

use std::sync::Arc;

use crate::common::time::Clock;
use crate::domain::{Room, RoomStore};

use super::error::CreateRoomError;

/// Room creation over the directory API.
///
/// Rooms come into existence only through this path; joining never creates
/// one. The store generates the short shareable id.
pub struct CreateRoomUseCase {
    room_store: Arc<dyn RoomStore>,
    clock: Arc<dyn Clock>,
}

impl CreateRoomUseCase {
    pub fn new(room_store: Arc<dyn RoomStore>, clock: Arc<dyn Clock>) -> Self {
        Self { room_store, clock }
    }

    pub async fn execute(
        &self,
        room_name: String,
        created_by: String,
    ) -> Result<Room, CreateRoomError> {
        let room_name = room_name.trim().to_string();
        if room_name.is_empty() {
            return Err(CreateRoomError::EmptyRoomName);
        }

        let room = self
            .room_store
            .create_room(
                room_name,
                created_by,
                crate::domain::Timestamp::new(self.clock.now_utc_millis()),
            )
            .await;

        tracing::info!("Room '{}' created as '{}'", room.name, room.id);
        Ok(room)
    }
}
