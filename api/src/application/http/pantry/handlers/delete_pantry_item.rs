use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::pantry::ports::PantryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeletePantryItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "pantry",
    summary = "Delete pantry item",
    description = "Removes the item without recording it as waste.",
    responses(
        (status = 200, body = DeletePantryItemResponse),
        (status = 404, description = "Not the caller's item")
    ),
    params(
        ("item_id" = Uuid, Path, description = "Pantry item ID"),
    ),
)]
pub async fn delete_pantry_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeletePantryItemResponse>, ApiError> {
    state
        .service
        .remove_pantry_item(identity, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeletePantryItemResponse {
        message: "Pantry item deleted".to_string(),
    }))
}
