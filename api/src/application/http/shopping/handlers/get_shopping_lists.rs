use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::shopping::entities::ShoppingList;
use larder_core::domain::shopping::ports::ShoppingService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetShoppingListsResponse {
    pub data: Vec<ShoppingList>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "shopping-list",
    summary = "Get shopping lists",
    description = "Lists the caller's shopping lists, oldest first.",
    responses(
        (status = 200, body = GetShoppingListsResponse)
    ),
)]
pub async fn get_shopping_lists(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetShoppingListsResponse>, ApiError> {
    let lists = state
        .service
        .get_shopping_lists(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetShoppingListsResponse { data: lists }))
}
