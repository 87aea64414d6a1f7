use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterBarcodeValidator {
    #[validate(length(min = 1, max = 15, message = "barcode must be 1-15 characters"))]
    pub barcode: String,

    #[validate(length(min = 1, message = "food_name is required"))]
    pub food_name: String,

    pub quantity: f64,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,
}
