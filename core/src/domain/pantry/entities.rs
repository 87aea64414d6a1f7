use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food::entities::QuantifiedFood};

/// Date format used everywhere a human-entered date travels the API.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PantryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub qfood: QuantifiedFood,
    pub expiry: Option<String>, // DD/MM/YYYY
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PantryItem {
    pub fn new(user_id: Uuid, qfood: QuantifiedFood, expiry: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            qfood,
            expiry,
            created_at: now,
            updated_at: now,
        }
    }

    /// The expiry parsed back to a date, if it holds one.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
    }
}
