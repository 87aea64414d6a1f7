use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::pantry::ports::PantryService;
use larder_core::domain::waste::entities::WastedFood;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DiscardPantryItemResponse {
    pub data: WastedFood,
}

#[utoipa::path(
    post,
    path = "/{item_id}/discard",
    tag = "pantry",
    summary = "Discard pantry item",
    description = "Moves the item into the waste log, keeping what it was and the expiry it carried.",
    responses(
        (status = 200, body = DiscardPantryItemResponse),
        (status = 404, description = "Not the caller's item")
    ),
    params(
        ("item_id" = Uuid, Path, description = "Pantry item ID"),
    ),
)]
pub async fn discard_pantry_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DiscardPantryItemResponse>, ApiError> {
    let record = state
        .service
        .discard_pantry_item(identity, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DiscardPantryItemResponse { data: record }))
}
