//! UseCase: list all rooms.

use std::sync::Arc;

use crate::domain::{Room, RoomStore};

/// Room directory listing, in creation order.
pub struct GetRoomsUseCase {
    room_store: Arc<dyn RoomStore>,
}

impl GetRoomsUseCase {
    pub fn new(room_store: Arc<dyn RoomStore>) -> Self {
        Self { room_store }
    }

    pub async fn execute(&self) -> Vec<Room> {
        self.room_store.list_rooms().await
    }
}
