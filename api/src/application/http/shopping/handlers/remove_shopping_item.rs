use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::shopping::ports::ShoppingService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RemoveShoppingItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{list_id}/items/{item_id}",
    tag = "shopping-list",
    summary = "Remove shopping item",
    description = "Takes one item off the list.",
    responses(
        (status = 200, body = RemoveShoppingItemResponse),
        (status = 404, description = "Not the caller's list")
    ),
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
        ("item_id" = Uuid, Path, description = "Shopping item ID"),
    ),
)]
pub async fn remove_shopping_item(
    Path((list_id, item_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<RemoveShoppingItemResponse>, ApiError> {
    state
        .service
        .remove_shopping_item(identity, list_id, item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RemoveShoppingItemResponse {
        message: "Shopping item removed".to_string(),
    }))
}
