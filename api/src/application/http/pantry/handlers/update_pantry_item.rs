use crate::application::auth::RequiredIdentity;
use crate::application::http::pantry::validators::UpdatePantryItemValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::pantry::entities::PantryItem;
use larder_core::domain::pantry::ports::PantryService;
use larder_core::domain::pantry::value_objects::UpdatePantryItemInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdatePantryItemResponse {
    pub data: PantryItem,
}

#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "pantry",
    summary = "Update pantry item",
    description = "Updates quantity, unit or expiry of one pantry item. Absent fields keep their value.",
    responses(
        (status = 200, body = UpdatePantryItemResponse),
        (status = 404, description = "Not the caller's item")
    ),
    params(
        ("item_id" = Uuid, Path, description = "Pantry item ID"),
    ),
    request_body = UpdatePantryItemValidator
)]
pub async fn update_pantry_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdatePantryItemValidator>,
) -> Result<Response<UpdatePantryItemResponse>, ApiError> {
    let item = state
        .service
        .update_pantry_item(
            identity,
            item_id,
            UpdatePantryItemInput {
                quantity: payload.quantity,
                unit: payload.unit,
                expiry: payload.expiry,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePantryItemResponse { data: item }))
}
