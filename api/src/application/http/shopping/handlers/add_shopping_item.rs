use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::shopping::validators::AddShoppingItemValidator;
use axum::extract::{Path, State};
use larder_core::domain::food::value_objects::NewQuantifiedFood;
use larder_core::domain::shopping::entities::ShoppingItem;
use larder_core::domain::shopping::ports::ShoppingService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddShoppingItemResponse {
    pub data: ShoppingItem,
}

#[utoipa::path(
    post,
    path = "/{list_id}/items",
    tag = "shopping-list",
    summary = "Add shopping item",
    description = "Puts an amount of food on the list.",
    responses(
        (status = 201, body = AddShoppingItemResponse),
        (status = 404, description = "Not the caller's list")
    ),
    params(
        ("list_id" = Uuid, Path, description = "Shopping list ID"),
    ),
    request_body = AddShoppingItemValidator
)]
pub async fn add_shopping_item(
    Path(list_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddShoppingItemValidator>,
) -> Result<Response<AddShoppingItemResponse>, ApiError> {
    let item = state
        .service
        .add_shopping_item(
            identity,
            list_id,
            NewQuantifiedFood {
                food_name: payload.food_name,
                quantity: payload.quantity,
                unit: payload.unit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddShoppingItemResponse { data: item }))
}
