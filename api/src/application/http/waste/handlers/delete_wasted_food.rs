use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::waste::ports::WasteService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteWastedFoodResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{waste_id}",
    tag = "waste",
    summary = "Delete waste record",
    description = "Drops one record from the waste log.",
    responses(
        (status = 200, body = DeleteWastedFoodResponse),
        (status = 404, description = "Not the caller's record")
    ),
    params(
        ("waste_id" = Uuid, Path, description = "Waste record ID"),
    ),
)]
pub async fn delete_wasted_food(
    Path(waste_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteWastedFoodResponse>, ApiError> {
    state
        .service
        .delete_wasted_food(identity, waste_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteWastedFoodResponse {
        message: "Waste record deleted".to_string(),
    }))
}
