use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::shopping::validators::CreateShoppingListValidator;
use axum::extract::State;
use larder_core::domain::shopping::entities::ShoppingList;
use larder_core::domain::shopping::ports::ShoppingService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateShoppingListResponse {
    pub data: ShoppingList,
}

#[utoipa::path(
    post,
    path = "",
    tag = "shopping-list",
    summary = "Create shopping list",
    description = "Creates an empty named list.",
    responses(
        (status = 201, body = CreateShoppingListResponse)
    ),
    request_body = CreateShoppingListValidator
)]
pub async fn create_shopping_list(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateShoppingListValidator>,
) -> Result<Response<CreateShoppingListResponse>, ApiError> {
    let list = state
        .service
        .create_shopping_list(identity, payload.name)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateShoppingListResponse { data: list }))
}
