use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food::entities::QuantifiedFood};

/// A discarded pantry item. Keeps the quantified row so the waste log can
/// show what was thrown away, and the expiry it carried at the time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WastedFood {
    pub id: Uuid,
    pub user_id: Uuid,
    pub qfood: QuantifiedFood,
    pub expired: Option<String>, // DD/MM/YYYY
    pub recorded_at: DateTime<Utc>,
}

impl WastedFood {
    pub fn new(user_id: Uuid, qfood: QuantifiedFood, expired: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            qfood,
            expired,
            recorded_at: now,
        }
    }
}
