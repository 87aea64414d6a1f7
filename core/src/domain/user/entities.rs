use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String, // DD/MM/YYYY
    pub role: String,          // 'user' | 'admin'
    pub registered_on: DateTime<Utc>,
    pub current_login: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub current_login_ip: Option<String>,
    pub last_login_ip: Option<String>,
    pub total_logins: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserConfig {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub role: String,
}

impl User {
    pub fn new(config: UserConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            email: config.email,
            first_name: config.first_name,
            last_name: config.last_name,
            date_of_birth: config.date_of_birth,
            role: config.role,
            registered_on: now,
            current_login: None,
            last_login: None,
            current_login_ip: None,
            last_login_ip: None,
            total_logins: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shifts the current login metadata into the `last_*` slots and stamps
    /// the new login. Called on every successful credential verification.
    pub fn record_login(&mut self, ip: Option<String>) {
        let (now, _) = generate_timestamp();

        self.last_login = self.current_login;
        self.last_login_ip = self.current_login_ip.take();
        self.current_login = Some(now);
        self.current_login_ip = ip;
        self.total_logins += 1;
        self.updated_at = now;
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
