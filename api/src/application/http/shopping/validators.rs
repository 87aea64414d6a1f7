use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateShoppingListValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddShoppingItemValidator {
    #[validate(length(min = 1, message = "food_name is required"))]
    pub food_name: String,

    pub quantity: f64,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,
}
