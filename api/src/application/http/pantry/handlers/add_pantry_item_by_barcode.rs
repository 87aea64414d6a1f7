use crate::application::auth::RequiredIdentity;
use crate::application::http::pantry::validators::AddPantryItemByBarcodeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::pantry::entities::PantryItem;
use larder_core::domain::pantry::ports::PantryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddPantryItemByBarcodeResponse {
    pub data: PantryItem,
}

#[utoipa::path(
    post,
    path = "/barcode/{barcode}",
    tag = "pantry",
    summary = "Add pantry item by barcode",
    description = "Copies the food registered under the barcode into the caller's pantry. \
        Without an explicit expiry the item gets one suggested from the food's shelf life.",
    responses(
        (status = 201, body = AddPantryItemByBarcodeResponse),
        (status = 404, description = "Barcode not registered")
    ),
    params(
        ("barcode" = String, Path, description = "Product barcode"),
    ),
    request_body = AddPantryItemByBarcodeValidator
)]
pub async fn add_pantry_item_by_barcode(
    Path(barcode): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddPantryItemByBarcodeValidator>,
) -> Result<Response<AddPantryItemByBarcodeResponse>, ApiError> {
    let item = state
        .service
        .add_pantry_item_by_barcode(identity, barcode, payload.expiry)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddPantryItemByBarcodeResponse {
        data: item,
    }))
}
