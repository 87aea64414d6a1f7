use crate::application::auth::RequiredIdentity;
use crate::application::http::food::validators::RegisterBarcodeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::food::entities::Barcode;
use larder_core::domain::food::ports::FoodService;
use larder_core::domain::food::value_objects::{NewQuantifiedFood, RegisterBarcodeInput};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct RegisterBarcodeResponse {
    pub data: Barcode,
}

#[utoipa::path(
    post,
    path = "/barcodes",
    tag = "food",
    summary = "Register barcode",
    description = "Associates a barcode with an amount of food. Pantry additions by this \
        barcode copy the amount rather than share it.",
    responses(
        (status = 201, body = RegisterBarcodeResponse),
        (status = 400, description = "Barcode already registered or invalid")
    ),
    request_body = RegisterBarcodeValidator
)]
pub async fn register_barcode(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RegisterBarcodeValidator>,
) -> Result<Response<RegisterBarcodeResponse>, ApiError> {
    let barcode = state
        .service
        .register_barcode(RegisterBarcodeInput {
            barcode: payload.barcode,
            food: NewQuantifiedFood {
                food_name: payload.food_name,
                quantity: payload.quantity,
                unit: payload.unit,
            },
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterBarcodeResponse { data: barcode }))
}
