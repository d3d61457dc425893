//! Value objects with validated constructors.
//!
//! Raw strings from the transport boundary are converted into these types
//! before they reach the usecase layer, so the core never handles an empty
//! username or an oversized chat message.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum length of a username in characters.
const USERNAME_MAX_CHARS: usize = 64;

/// Maximum length of a chat message in characters.
const MESSAGE_MAX_CHARS: usize = 2000;

/// Maximum length of a room id in characters.
const ROOM_ID_MAX_CHARS: usize = 32;

/// Validation failure for a value object constructor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("value must not be empty")]
    Empty,
    #[error("value exceeds maximum length of {0} characters")]
    TooLong(usize),
    #[error("room id must contain only alphanumeric characters or '-'")]
    InvalidRoomId,
}

/// Identifier of one live transport session.
///
/// Unique per WebSocket connection, generated server-side on connect. This is
/// the routable peer identifier carried in signaling `from`/`to` fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Generate a fresh connection id (uuid v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short opaque room identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty);
        }
        if value.chars().count() > ROOM_ID_MAX_CHARS {
            return Err(ValidationError::TooLong(ROOM_ID_MAX_CHARS));
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ValidationError::InvalidRoomId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Factory for short collision-resistant room ids.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate an 8-character room id from a uuid v4.
    ///
    /// Collisions are possible at this length; the room store checks for an
    /// existing id and regenerates rather than overwriting.
    pub fn generate() -> RoomId {
        let id: String = Uuid::new_v4().simple().to_string().chars().take(8).collect();
        RoomId(id)
    }
}

/// Display name of a participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty);
        }
        if value.chars().count() > USERNAME_MAX_CHARS {
            return Err(ValidationError::TooLong(USERNAME_MAX_CHARS));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an authenticated user account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Chat message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Empty);
        }
        if value.chars().count() > MESSAGE_MAX_CHARS {
            return Err(ValidationError::TooLong(MESSAGE_MAX_CHARS));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Unix timestamp in UTC milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
