//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessageText, RoomId, ServerEvent, UserId, Username},
    infrastructure::dto::ws::ClientEvent,
    infrastructure::message_pusher::websocket::OUTBOUND_QUEUE_CAPACITY,
    ui::state::AppState,
    usecase::{JoinError, SignalKind},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the connection's outbound queue into the
/// WebSocket sink. Exits when the queue closes or the peer stops reading.
fn pusher_loop(
    mut rx: mpsc::Receiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // The server assigns the connection id; clients learn each other's ids
    // from signaling `from` fields.
    let conn_id = ConnectionId::generate();

    let (tx, rx) = mpsc::channel(OUTBOUND_QUEUE_CAPACITY);
    state
        .join_room_usecase
        .register_connection(conn_id.clone())
        .await;
    state
        .message_pusher
        .register_client(conn_id.clone(), tx)
        .await;
    tracing::info!("Connection '{}' established", conn_id);

    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);

    let recv_state = state.clone();
    let recv_conn_id = conn_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", recv_conn_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    dispatch_event(&recv_state, &recv_conn_id, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping from '{}'", recv_conn_id);
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", recv_conn_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.disconnect_usecase.execute(&conn_id).await;
}

/// Parse one inbound frame and route it to its usecase.
///
/// A frame that fails to parse or validate is rejected for that single event:
/// the sender gets an `error` event, nothing is mutated, nothing is broadcast,
/// and the connection stays open.
async fn dispatch_event(state: &Arc<AppState>, conn_id: &ConnectionId, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Unparseable event from '{}': {}", conn_id, e);
            report_error(state, conn_id, "Unrecognized event").await;
            return;
        }
    };

    match event {
        ClientEvent::Join {
            room_id,
            username,
            user_id,
        } => {
            let (room_id, username) = match (RoomId::new(room_id), Username::new(username)) {
                (Ok(room_id), Ok(username)) => (room_id, username),
                _ => {
                    report_error(state, conn_id, "Invalid room id or username").await;
                    return;
                }
            };
            let user_id = user_id.and_then(|raw| UserId::new(raw).ok());

            if let Err(JoinError::RoomNotFound) = state
                .join_room_usecase
                .execute(conn_id, room_id, username, user_id)
                .await
            {
                report_error(state, conn_id, "Room not found").await;
            }
        }
        ClientEvent::Leave { room_id, username } => {
            let claimed_room = RoomId::new(room_id).ok();
            let claimed_username = Username::new(username).ok();
            state
                .leave_room_usecase
                .execute(conn_id, claimed_room.as_ref(), claimed_username.as_ref())
                .await;
        }
        ClientEvent::Offer { offer, to, .. } => {
            relay(state, conn_id, SignalKind::Offer, offer, to).await;
        }
        ClientEvent::Answer { answer, to, .. } => {
            relay(state, conn_id, SignalKind::Answer, answer, to).await;
        }
        ClientEvent::IceCandidate { candidate, to, .. } => {
            relay(state, conn_id, SignalKind::IceCandidate, candidate, to).await;
        }
        ClientEvent::ChatMessage {
            room_id,
            message,
            username,
            user_id,
        } => {
            let (room_id, username, text) = match (
                RoomId::new(room_id),
                Username::new(username),
                MessageText::new(message.text),
            ) {
                (Ok(room_id), Ok(username), Ok(text)) => (room_id, username, text),
                _ => {
                    report_error(state, conn_id, "Invalid chat message").await;
                    return;
                }
            };
            let user_id = user_id.and_then(|raw| UserId::new(raw).ok());

            state
                .chat_relay_usecase
                .execute(conn_id, room_id, username, text.into_string(), user_id)
                .await;
        }
    }
}

async fn relay(
    state: &Arc<AppState>,
    conn_id: &ConnectionId,
    kind: SignalKind,
    payload: serde_json::Value,
    to: String,
) {
    let Ok(to) = ConnectionId::new(to) else {
        report_error(state, conn_id, "Invalid signaling target").await;
        return;
    };
    state
        .relay_signal_usecase
        .execute(kind, payload, conn_id, &to)
        .await;
}

/// Report a per-event failure to the offending connection only.
async fn report_error(state: &Arc<AppState>, conn_id: &ConnectionId, message: &str) {
    let event = ServerEvent::Error {
        message: message.to_string(),
    };
    if let Err(e) = state.message_pusher.push_to(conn_id, &event.to_json()).await {
        tracing::debug!("Failed to report error to '{}': {}", conn_id, e);
    }
}
