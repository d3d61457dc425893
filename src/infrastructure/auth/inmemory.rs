//! In-memory `AuthProvider` implementation.
//!
//! Users live in a `Mutex<HashMap>` keyed by email; session tokens are opaque
//! uuids. Password hashing and signed-token issuance belong to a production
//! adapter behind the same port; this adapter exists so the HTTP layer and
//! tests have a working collaborator without external services.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{AuthError, AuthProvider, AuthenticatedUser, NewUser, UserId};

const DEFAULT_ROLE: &str = "teacher";

struct UserRecord {
    user_id: UserId,
    username: String,
    email: String,
    password: String,
    role: String,
}

/// Auth provider backed by an in-memory user map.
#[derive(Default)]
pub struct InMemoryAuthProvider {
    users: Mutex<HashMap<String, UserRecord>>,
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    fn issue_token() -> String {
        Uuid::new_v4().to_string()
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn register(&self, new_user: NewUser) -> Result<AuthenticatedUser, AuthError> {
        let mut users = self.users.lock().await;

        let exists = users.contains_key(&new_user.email)
            || users.values().any(|u| u.username == new_user.username);
        if exists {
            return Err(AuthError::UserAlreadyExists);
        }

        let user_id = UserId::new(Uuid::new_v4().to_string())
            .map_err(|_| AuthError::InvalidCredentials)?;
        let role = new_user.role.unwrap_or_else(|| DEFAULT_ROLE.to_string());

        let record = UserRecord {
            user_id: user_id.clone(),
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            password: new_user.password,
            role: role.clone(),
        };
        users.insert(new_user.email.clone(), record);

        tracing::info!("Registered user '{}'", new_user.username);
        Ok(AuthenticatedUser {
            user_id,
            username: new_user.username,
            email: new_user.email,
            role,
            token: Self::issue_token(),
        })
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        let users = self.users.lock().await;

        let record = users.get(email).ok_or(AuthError::InvalidCredentials)?;
        if record.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthenticatedUser {
            user_id: record.user_id.clone(),
            username: record.username.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
            token: Self::issue_token(),
        })
    }
}
