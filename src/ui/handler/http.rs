//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    common::time::timestamp_to_rfc3339,
    domain::{AuthError, NewUser, Room},
    infrastructure::dto::http::{
        AuthResponse, CreateRoomRequest, CreateRoomResponse, ErrorResponse, LoginRequest,
        RegisterRequest, RoomSummaryDto, UserDto,
    },
    ui::state::AppState,
    usecase::{CreateRoomError, GetRoomDetailError},
};

fn to_summary(room: Room) -> RoomSummaryDto {
    RoomSummaryDto {
        id: room.id.into_string(),
        name: room.name,
        created_by: room.created_by,
        created_at: timestamp_to_rfc3339(room.created_at.value()),
        participants: room.participants.into_iter().map(|p| p.into_string()).collect(),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;
    Json(rooms.into_iter().map(to_summary).collect())
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomSummaryDto>, StatusCode> {
    match state.get_room_detail_usecase.execute(&room_id).await {
        Ok(room) => Ok(Json(to_summary(room))),
        Err(GetRoomDetailError::RoomNotFound) => Err(StatusCode::NOT_FOUND),
    }
}

/// Create a room
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<CreateRoomResponse>), (StatusCode, Json<ErrorResponse>)> {
    match state
        .create_room_usecase
        .execute(request.room_name, request.created_by)
        .await
    {
        Ok(room) => Ok((
            StatusCode::CREATED,
            Json(CreateRoomResponse {
                room_id: room.id.into_string(),
                room_name: room.name,
            }),
        )),
        Err(CreateRoomError::EmptyRoomName) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Room name is required".to_string(),
            }),
        )),
    }
}

fn auth_response(message: &str, user: crate::domain::AuthenticatedUser) -> AuthResponse {
    AuthResponse {
        message: message.to_string(),
        token: user.token,
        user: UserDto {
            id: user.user_id.into_string(),
            username: user.username,
            email: user.email,
            role: user.role,
        },
    }
}

/// Register a new user account
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), (StatusCode, Json<ErrorResponse>)> {
    let new_user = NewUser {
        username: request.username,
        email: request.email,
        password: request.password,
        role: request.role,
    };

    match state.auth_provider.register(new_user).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(auth_response("Registration successful", user)),
        )),
        Err(AuthError::UserAlreadyExists) => Err((
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "User already exists".to_string(),
            }),
        )),
        Err(AuthError::InvalidCredentials) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid registration data".to_string(),
            }),
        )),
    }
}

/// Log in with email and password
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state
        .auth_provider
        .login(&request.email, &request.password)
        .await
    {
        Ok(user) => Ok(Json(auth_response("Login successful", user))),
        Err(_) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Invalid credentials".to_string(),
            }),
        )),
    }
}
