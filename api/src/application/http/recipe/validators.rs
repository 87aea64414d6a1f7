use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct IngredientValidator {
    #[validate(length(min = 1, message = "food_name is required"))]
    pub food_name: String,

    pub quantity: f64,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "method is required"))]
    pub method: String,

    #[validate(range(min = 1, message = "serves must be at least 1"))]
    pub serves: i32,

    #[serde(default)]
    pub calories: Option<f64>,

    #[validate(length(min = 1, message = "at least one ingredient is required"), nested)]
    pub ingredients: Vec<IngredientValidator>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecipeValidator {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "serves must be at least 1"))]
    pub serves: Option<i32>,

    #[serde(default)]
    pub calories: Option<f64>,

    /// When present, replaces the whole ingredient list.
    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Option<Vec<IngredientValidator>>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RateRecipeValidator {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub value: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompleteRecipeValidator {
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i32>,
}
