use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food::value_objects::StockKey};

/// A name in the food catalogue. Created on first reference and kept forever;
/// quantified rows point at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl FoodItem {
    pub fn new(name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            created_at: now,
        }
    }
}

/// An amount of a catalogue food at one use-site (pantry row, ingredient,
/// shopping item, waste record, barcode). Each site owns its own row; the
/// sanctioned reuse paths move the row between owners instead of copying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuantifiedFood {
    pub id: Uuid,
    pub food_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl QuantifiedFood {
    pub fn new(food: &FoodItem, quantity: f64, unit: String) -> Self {
        let (_, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            food_id: food.id,
            name: food.name.clone(),
            quantity,
            unit,
        }
    }

    pub fn stock_key(&self) -> StockKey {
        StockKey::new(&self.name, &self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Barcode {
    pub id: Uuid,
    pub barcode: String,
    pub qfood: QuantifiedFood,
    pub created_at: DateTime<Utc>,
}

impl Barcode {
    pub fn new(barcode: String, qfood: QuantifiedFood) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            barcode,
            qfood,
            created_at: now,
        }
    }
}
