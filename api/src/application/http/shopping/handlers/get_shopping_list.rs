use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::shopping::ports::ShoppingService;
use larder_core::domain::shopping::value_objects::ShoppingListDetails;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetShoppingListResponse {
    pub data: ShoppingListDetails,
}

#[utoipa::path(
    get,
    path = "/{list_id}",
    tag = "shopping-list",
    summary = "Get shopping list",
    description = "Returns the list with its items.",
    responses(
        (status = 200, body = GetShoppingListResponse),
        (status = 404, description = "Not the caller's list")
    ),
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
    ),
)]
pub async fn get_shopping_list(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetShoppingListResponse>, ApiError> {
    let details = state
        .service
        .get_shopping_list(identity, list_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetShoppingListResponse { data: details }))
}
