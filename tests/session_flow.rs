//! End-to-end session flow over the assembled usecase stack, without sockets.
//!
//! Wires the same components the server binary wires and drives a full
//! room session: create a room, two participants join, signaling is relayed,
//! chat is broadcast, one participant leaves, the other disconnects.

use std::sync::Arc;

use tokio::sync::mpsc;

use brightmeet::common::time::FixedClock;
use brightmeet::domain::{ConnectionId, MessagePusher, RoomId, RoomStore, Username};
use brightmeet::infrastructure::message_pusher::WebSocketMessagePusher;
use brightmeet::infrastructure::message_pusher::websocket::OUTBOUND_QUEUE_CAPACITY;
use brightmeet::infrastructure::repository::{InMemoryConnectionRegistry, InMemoryRoomStore};
use brightmeet::infrastructure::responder::CommandBot;
use brightmeet::usecase::{
    ChatRelayUseCase, CreateRoomUseCase, DisconnectUseCase, JoinRoomUseCase, LeaveRoomUseCase,
    RelaySignalUseCase, SessionGate, SignalKind,
};

struct Stack {
    room_store: Arc<InMemoryRoomStore>,
    pusher: Arc<WebSocketMessagePusher>,
    join: Arc<JoinRoomUseCase>,
    leave: Arc<LeaveRoomUseCase>,
    disconnect: DisconnectUseCase,
    relay: RelaySignalUseCase,
    chat: ChatRelayUseCase,
    create_room: CreateRoomUseCase,
}

fn stack() -> Stack {
    let registry = Arc::new(InMemoryConnectionRegistry::new());
    let room_store = Arc::new(InMemoryRoomStore::new());
    let pusher = Arc::new(WebSocketMessagePusher::new());
    let clock = Arc::new(FixedClock::new(1_700_000_000_000));
    let gate = Arc::new(SessionGate::new());

    let join = Arc::new(JoinRoomUseCase::new(
        registry.clone(),
        room_store.clone(),
        pusher.clone(),
        gate.clone(),
    ));
    let leave = Arc::new(LeaveRoomUseCase::new(
        registry.clone(),
        room_store.clone(),
        pusher.clone(),
        gate,
    ));
    let disconnect = DisconnectUseCase::new(leave.clone(), registry.clone(), pusher.clone());
    let relay = RelaySignalUseCase::new(registry.clone(), pusher.clone());
    let chat = ChatRelayUseCase::new(
        registry,
        pusher.clone(),
        Arc::new(CommandBot::new()),
        clock.clone(),
    );
    let create_room = CreateRoomUseCase::new(room_store.clone(), clock);

    Stack {
        room_store,
        pusher,
        join,
        leave,
        disconnect,
        relay,
        chat,
        create_room,
    }
}

fn conn_id(s: &str) -> ConnectionId {
    ConnectionId::new(s.to_string()).unwrap()
}

fn name(s: &str) -> Username {
    Username::new(s.to_string()).unwrap()
}

async fn connect(stack: &Stack, id: &str) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(OUTBOUND_QUEUE_CAPACITY);
    stack.join.register_connection(conn_id(id)).await;
    stack.pusher.register_client(conn_id(id), tx).await;
    rx
}

async fn next_event(rx: &mut mpsc::Receiver<String>) -> serde_json::Value {
    serde_json::from_str(&rx.recv().await.expect("expected an event")).unwrap()
}

#[tokio::test]
async fn test_full_room_session() {
    // given: a room created over the directory API
    let stack = stack();
    let room = stack
        .create_room
        .execute("Math Tutoring".to_string(), "alice".to_string())
        .await
        .unwrap();
    let room_id: RoomId = room.id;

    let mut alice_rx = connect(&stack, "conn-alice").await;
    let mut bob_rx = connect(&stack, "conn-bob").await;

    // when: alice joins
    stack
        .join
        .execute(&conn_id("conn-alice"), room_id.clone(), name("alice"), None)
        .await
        .unwrap();

    // then: she receives only her own participant list
    let list = next_event(&mut alice_rx).await;
    assert_eq!(list["type"], "room-participants");
    assert_eq!(list["participants"], serde_json::json!(["alice"]));

    // when: bob joins
    stack
        .join
        .execute(&conn_id("conn-bob"), room_id.clone(), name("bob"), None)
        .await
        .unwrap();

    // then: alice sees user-connected before the updated list
    let joined = next_event(&mut alice_rx).await;
    assert_eq!(joined["type"], "user-connected");
    assert_eq!(joined["username"], "bob");
    let list = next_event(&mut alice_rx).await;
    assert_eq!(list["participants"], serde_json::json!(["alice", "bob"]));
    let list = next_event(&mut bob_rx).await;
    assert_eq!(list["participants"], serde_json::json!(["alice", "bob"]));

    // when: bob sends alice an offer and alice answers
    stack
        .relay
        .execute(
            SignalKind::Offer,
            serde_json::json!({"sdp": "v=0", "type": "offer"}),
            &conn_id("conn-bob"),
            &conn_id("conn-alice"),
        )
        .await;
    let offer = next_event(&mut alice_rx).await;
    assert_eq!(offer["type"], "offer");
    assert_eq!(offer["from"], "conn-bob");

    stack
        .relay
        .execute(
            SignalKind::Answer,
            serde_json::json!({"sdp": "v=0", "type": "answer"}),
            &conn_id("conn-alice"),
            &conn_id("conn-bob"),
        )
        .await;
    let answer = next_event(&mut bob_rx).await;
    assert_eq!(answer["type"], "answer");
    assert_eq!(answer["from"], "conn-alice");

    // when: alice chats
    stack
        .chat
        .execute(
            &conn_id("conn-alice"),
            room_id.clone(),
            name("alice"),
            "hi bob".to_string(),
            None,
        )
        .await;

    // then: both members receive the message, alice included
    let to_alice = next_event(&mut alice_rx).await;
    let to_bob = next_event(&mut bob_rx).await;
    assert_eq!(to_alice, to_bob);
    assert_eq!(to_alice["type"], "chat-message");
    assert_eq!(to_alice["text"], "hi bob");

    // when: bob leaves explicitly
    stack.leave.execute(&conn_id("conn-bob"), None, None).await;

    // then: alice is told, bob hears nothing more
    let left = next_event(&mut alice_rx).await;
    assert_eq!(left["type"], "user-left");
    assert_eq!(left["username"], "bob");
    let list = next_event(&mut alice_rx).await;
    assert_eq!(list["participants"], serde_json::json!(["alice"]));
    assert!(bob_rx.try_recv().is_err());

    // when: alice's transport drops
    stack.disconnect.execute(&conn_id("conn-alice")).await;

    // then: the room survives with zero participants
    let room = stack.room_store.get_room(&room_id).await.unwrap();
    assert!(room.participants.is_empty());
}

#[tokio::test]
async fn test_bot_command_in_full_stack() {
    // given: alice alone in a room
    let stack = stack();
    let room = stack
        .create_room
        .execute("Bots".to_string(), "alice".to_string())
        .await
        .unwrap();
    let mut alice_rx = connect(&stack, "conn-alice").await;
    stack
        .join
        .execute(&conn_id("conn-alice"), room.id.clone(), name("alice"), None)
        .await
        .unwrap();
    let _ = alice_rx.recv().await;

    // when: she sends a bot command
    stack
        .chat
        .execute(
            &conn_id("conn-alice"),
            room.id,
            name("alice"),
            ".calculate 6 * 7".to_string(),
            None,
        )
        .await;

    // then: the command is not echoed, only the tagged bot reply arrives
    let reply = next_event(&mut alice_rx).await;
    assert_eq!(reply["username"], "Khalid Bot");
    assert_eq!(reply["text"], "6 * 7 = 42");
    assert_eq!(reply["isBot"], true);
    assert!(alice_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_join_unknown_room_reports_error_only_to_joiner() {
    // given:
    let stack = stack();
    let room = stack
        .create_room
        .execute("Real".to_string(), "alice".to_string())
        .await
        .unwrap();
    let mut alice_rx = connect(&stack, "conn-alice").await;
    let mut bob_rx = connect(&stack, "conn-bob").await;
    stack
        .join
        .execute(&conn_id("conn-alice"), room.id, name("alice"), None)
        .await
        .unwrap();
    let _ = alice_rx.recv().await;

    // when: bob joins a room that does not exist
    let result = stack
        .join
        .execute(
            &conn_id("conn-bob"),
            RoomId::new("nosuchrm".to_string()).unwrap(),
            name("bob"),
            None,
        )
        .await;

    // then: bob gets the error, alice observes nothing
    assert!(result.is_err());
    assert!(alice_rx.try_recv().is_err());
    assert!(bob_rx.try_recv().is_err());
}
