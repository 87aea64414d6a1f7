use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::pantry::entities::PantryItem;
use larder_core::domain::shopping::ports::ShoppingService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CompleteShoppingListResponse {
    pub data: Vec<PantryItem>,
}

#[utoipa::path(
    post,
    path = "/{list_id}/complete",
    tag = "shopping-list",
    summary = "Complete shopping list",
    description = "Marks the list bought: every item lands in the pantry with a suggested \
        expiry date and the list disappears.",
    responses(
        (status = 200, body = CompleteShoppingListResponse),
        (status = 404, description = "Not the caller's list")
    ),
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
    ),
)]
pub async fn complete_shopping_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<CompleteShoppingListResponse>, ApiError> {
    let items = state
        .service
        .complete_shopping_list(identity, list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CompleteShoppingListResponse { data: items }))
}
