//! Authentication collaborator port.
//!
//! Password hashing, token issuance and persistent user storage are outside
//! the relay core; the HTTP layer talks to this trait and a deployment picks
//! the adapter.

use async_trait::async_trait;
use thiserror::Error;

use super::value_object::UserId;

/// Registration request payload.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// A successfully authenticated user plus a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub token: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Registration and login operations.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn register(&self, new_user: NewUser) -> Result<AuthenticatedUser, AuthError>;

    async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError>;
}
