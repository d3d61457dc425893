//! In-memory connection registry.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Connection, ConnectionId, ConnectionRegistry, RoomId, Timestamp, UserId, Username,
};

/// Connection registry backed by a `Mutex<HashMap>`.
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    connections: Mutex<HashMap<ConnectionId, Connection>>,
}

impl InMemoryConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(&self, id: ConnectionId, connected_at: Timestamp) -> Connection {
        let conn = Connection::new(id.clone(), connected_at);
        let mut connections = self.connections.lock().await;
        connections.insert(id, conn.clone());
        conn
    }

    async fn attach_identity(
        &self,
        id: &ConnectionId,
        username: Username,
        user_id: Option<UserId>,
    ) {
        let mut connections = self.connections.lock().await;
        if let Some(conn) = connections.get_mut(id) {
            conn.attach_identity(username, user_id);
        }
    }

    async fn set_room(&self, id: &ConnectionId, room_id: RoomId) {
        let mut connections = self.connections.lock().await;
        if let Some(conn) = connections.get_mut(id) {
            conn.set_room(room_id);
        }
    }

    async fn clear_room(&self, id: &ConnectionId) {
        let mut connections = self.connections.lock().await;
        if let Some(conn) = connections.get_mut(id) {
            conn.clear_room();
        }
    }

    async fn lookup(&self, id: &ConnectionId) -> Option<Connection> {
        let connections = self.connections.lock().await;
        connections.get(id).cloned()
    }

    async fn remove(&self, id: &ConnectionId) {
        let mut connections = self.connections.lock().await;
        if connections.remove(id).is_none() {
            tracing::debug!("Connection '{}' already removed", id);
        }
    }

    async fn connections_in_room(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        let connections = self.connections.lock().await;
        connections
            .values()
            .filter(|conn| conn.is_in(room_id))
            .map(|conn| conn.id.clone())
            .collect()
    }

    async fn count(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn_id(s: &str) -> ConnectionId {
        ConnectionId::new(s.to_string()).unwrap()
    }

    fn room_id(s: &str) -> RoomId {
        RoomId::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        // given:
        let registry = InMemoryConnectionRegistry::new();

        // when:
        registry.register(conn_id("c1"), Timestamp::new(1000)).await;
        let found = registry.lookup(&conn_id("c1")).await;

        // then: fresh connection is unauthenticated with no room
        let conn = found.unwrap();
        assert_eq!(conn.id, conn_id("c1"));
        assert!(conn.room_id.is_none());
        assert!(conn.username.is_none());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        // given:
        let registry = InMemoryConnectionRegistry::new();
        registry.register(conn_id("c1"), Timestamp::new(1000)).await;

        // when: remove twice, then remove an unknown id
        registry.remove(&conn_id("c1")).await;
        registry.remove(&conn_id("c1")).await;
        registry.remove(&conn_id("never-registered")).await;

        // then: no panic, registry is empty
        assert_eq!(registry.count().await, 0);
    }

    #[tokio::test]
    async fn test_connections_in_room_filters_by_room() {
        // given:
        let registry = InMemoryConnectionRegistry::new();
        registry.register(conn_id("c1"), Timestamp::new(0)).await;
        registry.register(conn_id("c2"), Timestamp::new(0)).await;
        registry.register(conn_id("c3"), Timestamp::new(0)).await;

        // when: c1 and c2 are in room-a, c3 in room-b
        registry.set_room(&conn_id("c1"), room_id("room-a")).await;
        registry.set_room(&conn_id("c2"), room_id("room-a")).await;
        registry.set_room(&conn_id("c3"), room_id("room-b")).await;
        let members = registry.connections_in_room(&room_id("room-a")).await;

        // then:
        assert_eq!(members.len(), 2);
        assert!(members.contains(&conn_id("c1")));
        assert!(members.contains(&conn_id("c2")));
        assert!(!members.contains(&conn_id("c3")));
    }

    #[tokio::test]
    async fn test_clear_room_removes_membership() {
        // given:
        let registry = InMemoryConnectionRegistry::new();
        registry.register(conn_id("c1"), Timestamp::new(0)).await;
        registry.set_room(&conn_id("c1"), room_id("room-a")).await;

        // when:
        registry.clear_room(&conn_id("c1")).await;

        // then:
        assert!(
            registry
                .connections_in_room(&room_id("room-a"))
                .await
                .is_empty()
        );
        let conn = registry.lookup(&conn_id("c1")).await.unwrap();
        assert!(conn.room_id.is_none());
    }

    #[tokio::test]
    async fn test_attach_identity_on_unknown_id_is_noop() {
        // given:
        let registry = InMemoryConnectionRegistry::new();

        // when:
        registry
            .attach_identity(
                &conn_id("ghost"),
                Username::new("alice".to_string()).unwrap(),
                None,
            )
            .await;

        // then:
        assert_eq!(registry.count().await, 0);
    }
}
