use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::entities::User;

/// The authenticated caller, resolved by the session middleware and carried
/// through every use-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }

    pub fn user(&self) -> &User {
        match self {
            Identity::User(user) => user,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub ip: Option<String>,
}

/// Outcome of register/login: the user plus the plaintext bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
