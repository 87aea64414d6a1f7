use crate::application::auth::RequiredIdentity;
use crate::application::http::pantry::validators::AddPantryItemValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::pantry::entities::PantryItem;
use larder_core::domain::pantry::ports::PantryService;
use larder_core::domain::pantry::value_objects::AddPantryItemInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddPantryItemResponse {
    pub data: PantryItem,
}

#[utoipa::path(
    post,
    path = "",
    tag = "pantry",
    summary = "Add pantry item",
    description = "Adds an amount of food to the pantry, creating the catalogue entry when the name is new.",
    responses(
        (status = 201, body = AddPantryItemResponse),
        (status = 400, description = "Invalid quantity, unit or expiry")
    ),
    request_body = AddPantryItemValidator
)]
pub async fn add_pantry_item(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddPantryItemValidator>,
) -> Result<Response<AddPantryItemResponse>, ApiError> {
    let item = state
        .service
        .add_pantry_item(
            identity,
            AddPantryItemInput {
                food_name: payload.food_name,
                quantity: payload.quantity,
                unit: payload.unit,
                expiry: payload.expiry,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddPantryItemResponse { data: item }))
}
