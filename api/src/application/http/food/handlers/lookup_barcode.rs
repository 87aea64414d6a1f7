use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::food::entities::Barcode;
use larder_core::domain::food::ports::FoodService;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct LookupBarcodeResponse {
    pub data: Barcode,
}

#[utoipa::path(
    get,
    path = "/barcodes/{barcode}",
    tag = "food",
    summary = "Look up barcode",
    description = "Returns the food registered under the barcode.",
    responses(
        (status = 200, body = LookupBarcodeResponse),
        (status = 404, description = "Barcode not registered")
    ),
    params(
        ("barcode" = String, Path, description = "Product barcode"),
    ),
)]
pub async fn lookup_barcode(
    Path(barcode): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
) -> Result<Response<LookupBarcodeResponse>, ApiError> {
    let found = state
        .service
        .lookup_barcode(barcode)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LookupBarcodeResponse { data: found }))
}
