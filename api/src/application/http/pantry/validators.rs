use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddPantryItemValidator {
    #[validate(length(min = 1, message = "food_name is required"))]
    pub food_name: String,

    pub quantity: f64,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,

    /// DD/MM/YYYY
    #[serde(default)]
    pub expiry: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePantryItemValidator {
    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,

    /// DD/MM/YYYY
    #[serde(default)]
    pub expiry: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddPantryItemByBarcodeValidator {
    /// DD/MM/YYYY
    #[serde(default)]
    pub expiry: Option<String>,
}
