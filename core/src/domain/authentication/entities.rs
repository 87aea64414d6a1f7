use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// Server-side record of an issued bearer token. Only the SHA-256 of the
/// token is stored; the plaintext leaves the service exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn new(user_id: Uuid, token_hash: String, ttl: Duration) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
