use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food::entities::QuantifiedFood};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub method: String,
    pub serves: i32,
    pub calories: Option<f64>,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub user_id: Uuid,
    pub name: String,
    pub method: String,
    pub serves: i32,
    pub calories: Option<f64>,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            method: config.method,
            serves: config.serves,
            calories: config.calories,
            rating: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        method: Option<String>,
        serves: Option<i32>,
        calories: Option<f64>,
    ) {
        let (now, _) = generate_timestamp();

        if let Some(n) = name {
            self.name = n;
        }
        if let Some(m) = method {
            self.method = m;
        }
        if let Some(s) = serves {
            self.serves = s;
        }
        if let Some(c) = calories {
            self.calories = Some(c);
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub qfood: QuantifiedFood,
}

impl Ingredient {
    pub fn new(recipe_id: Uuid, qfood: QuantifiedFood) -> Self {
        let (_, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            qfood,
        }
    }
}

/// A recipe a user has started cooking. Its pantry stock is already spent;
/// completing the recipe just removes this marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InUseRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl InUseRecipe {
    pub fn new(user_id: Uuid, recipe_id: Uuid) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe_id,
            started_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub value: i32, // 1..=5
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(user_id: Uuid, recipe_id: Uuid, value: i32) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe_id,
            value,
            created_at: now,
            updated_at: now,
        }
    }
}
