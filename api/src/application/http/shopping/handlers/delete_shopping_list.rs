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
pub struct DeleteShoppingListResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{list_id}",
    tag = "shopping-list",
    summary = "Delete shopping list",
    description = "Deletes the list and everything on it without buying anything.",
    responses(
        (status = 200, body = DeleteShoppingListResponse),
        (status = 404, description = "Not the caller's list")
    ),
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
    ),
)]
pub async fn delete_shopping_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteShoppingListResponse>, ApiError> {
    state
        .service
        .delete_shopping_list(identity, list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteShoppingListResponse {
        message: "Shopping list deleted".to_string(),
    }))
}
