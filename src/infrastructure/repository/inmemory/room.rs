//! In-memory room store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Room, RoomId, RoomIdFactory, RoomStore, RoomStoreError, Timestamp, Username};

struct Inner {
    rooms: HashMap<RoomId, Room>,
    /// Room ids in creation order, for stable directory listings.
    order: Vec<RoomId>,
}

/// Room store backed by a `Mutex<HashMap>`.
///
/// Rooms persist until process restart; an empty participant set does not
/// delete the room.
pub struct InMemoryRoomStore {
    inner: Mutex<Inner>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                rooms: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryRoomStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn create_room(&self, name: String, created_by: String, created_at: Timestamp) -> Room {
        let mut inner = self.inner.lock().await;

        // Regenerate on collision rather than overwrite an existing room.
        let mut room_id = RoomIdFactory::generate();
        while inner.rooms.contains_key(&room_id) {
            tracing::warn!("Room id collision on '{}', regenerating", room_id);
            room_id = RoomIdFactory::generate();
        }

        let room = Room::new(room_id.clone(), name, created_by, created_at);
        inner.rooms.insert(room_id.clone(), room.clone());
        inner.order.push(room_id);
        room
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let inner = self.inner.lock().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.rooms.get(id).cloned())
            .collect()
    }

    async fn get_room(&self, id: &RoomId) -> Option<Room> {
        let inner = self.inner.lock().await;
        inner.rooms.get(id).cloned()
    }

    async fn add_participant(&self, id: &RoomId, name: Username) -> Result<(), RoomStoreError> {
        let mut inner = self.inner.lock().await;
        let room = inner.rooms.get_mut(id).ok_or(RoomStoreError::RoomNotFound)?;
        room.add_participant(name);
        Ok(())
    }

    async fn remove_participant(&self, id: &RoomId, name: &Username) {
        let mut inner = self.inner.lock().await;
        if let Some(room) = inner.rooms.get_mut(id) {
            room.remove_participant(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Username {
        Username::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_room_generates_unique_ids() {
        // given:
        let store = InMemoryRoomStore::new();

        // when:
        let a = store
            .create_room("Math".to_string(), "alice".to_string(), Timestamp::new(0))
            .await;
        let b = store
            .create_room("Science".to_string(), "bob".to_string(), Timestamp::new(0))
            .await;

        // then:
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.as_str().len(), 8);
        assert!(a.participants.is_empty());
    }

    #[tokio::test]
    async fn test_list_rooms_in_creation_order() {
        // given:
        let store = InMemoryRoomStore::new();
        store
            .create_room("First".to_string(), "alice".to_string(), Timestamp::new(0))
            .await;
        store
            .create_room("Second".to_string(), "bob".to_string(), Timestamp::new(1))
            .await;

        // when:
        let rooms = store.list_rooms().await;

        // then:
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "First");
        assert_eq!(rooms[1].name, "Second");
    }

    #[tokio::test]
    async fn test_get_room_unknown_id_is_none() {
        // given:
        let store = InMemoryRoomStore::new();

        // when:
        let result = store
            .get_room(&RoomId::new("nosuchrm".to_string()).unwrap())
            .await;

        // then:
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_add_participant_unknown_room_fails() {
        // given:
        let store = InMemoryRoomStore::new();

        // when:
        let result = store
            .add_participant(&RoomId::new("nosuchrm".to_string()).unwrap(), name("alice"))
            .await;

        // then:
        assert_eq!(result, Err(RoomStoreError::RoomNotFound));
    }

    #[tokio::test]
    async fn test_add_participant_is_idempotent() {
        // given:
        let store = InMemoryRoomStore::new();
        let room = store
            .create_room("Math".to_string(), "alice".to_string(), Timestamp::new(0))
            .await;

        // when: join delivered twice for the same name
        store.add_participant(&room.id, name("alice")).await.unwrap();
        store.add_participant(&room.id, name("alice")).await.unwrap();

        // then:
        let snapshot = store.get_room(&room.id).await.unwrap();
        assert_eq!(snapshot.participants, vec![name("alice")]);
    }

    #[tokio::test]
    async fn test_empty_room_is_not_deleted() {
        // given:
        let store = InMemoryRoomStore::new();
        let room = store
            .create_room("Math".to_string(), "alice".to_string(), Timestamp::new(0))
            .await;
        store.add_participant(&room.id, name("alice")).await.unwrap();

        // when: the last participant leaves
        store.remove_participant(&room.id, &name("alice")).await;

        // then: the room still exists with an empty participant set
        let snapshot = store.get_room(&room.id).await.unwrap();
        assert!(snapshot.participants.is_empty());
        assert_eq!(store.list_rooms().await.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_participant_unknown_room_is_noop() {
        // given:
        let store = InMemoryRoomStore::new();

        // when / then: no panic
        store
            .remove_participant(&RoomId::new("nosuchrm".to_string()).unwrap(), &name("alice"))
            .await;
    }
}
