//! WebRTC signaling server.
//!
//! Tracks rooms and their participants, relays offer/answer/ICE-candidate
//! payloads between peers and broadcasts chat (with bot replies) to rooms.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3001
//! ```

use std::sync::Arc;

use brightmeet::{
    common::{logger::setup_logger, time::SystemClock},
    infrastructure::{
        auth::InMemoryAuthProvider,
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryConnectionRegistry, InMemoryRoomStore},
        responder::CommandBot,
    },
    ui::{Server, state::AppState},
    usecase::{
        ChatRelayUseCase, CreateRoomUseCase, DisconnectUseCase, GetRoomDetailUseCase,
        GetRoomsUseCase, JoinRoomUseCase, LeaveRoomUseCase, RelaySignalUseCase, SessionGate,
    },
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "WebRTC signaling and room relay server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3001")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repositories
    // 2. MessagePusher
    // 3. Collaborators (clock, bot, auth)
    // 4. UseCases
    // 5. Server

    // 1. Create the connection registry and room store (in-memory)
    let registry = Arc::new(InMemoryConnectionRegistry::new());
    let room_store = Arc::new(InMemoryRoomStore::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create collaborators
    let clock = Arc::new(SystemClock);
    let responder = Arc::new(CommandBot::new());
    let auth_provider = Arc::new(InMemoryAuthProvider::new());

    // 4. Create UseCases; join/leave/disconnect share one session gate
    let gate = Arc::new(SessionGate::new());
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(
        registry.clone(),
        room_store.clone(),
        message_pusher.clone(),
        gate.clone(),
    ));
    let leave_room_usecase = Arc::new(LeaveRoomUseCase::new(
        registry.clone(),
        room_store.clone(),
        message_pusher.clone(),
        gate,
    ));
    let disconnect_usecase = Arc::new(DisconnectUseCase::new(
        leave_room_usecase.clone(),
        registry.clone(),
        message_pusher.clone(),
    ));
    let relay_signal_usecase = Arc::new(RelaySignalUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let chat_relay_usecase = Arc::new(ChatRelayUseCase::new(
        registry.clone(),
        message_pusher.clone(),
        responder,
        clock.clone(),
    ));
    let create_room_usecase = Arc::new(CreateRoomUseCase::new(room_store.clone(), clock));
    let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(room_store.clone()));
    let get_room_detail_usecase = Arc::new(GetRoomDetailUseCase::new(room_store));

    // 5. Create and run the server
    let server = Server::new(AppState {
        join_room_usecase,
        leave_room_usecase,
        disconnect_usecase,
        relay_signal_usecase,
        chat_relay_usecase,
        create_room_usecase,
        get_rooms_usecase,
        get_room_detail_usecase,
        auth_provider,
        message_pusher,
    });
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
