use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::waste::entities::WastedFood;
use larder_core::domain::waste::ports::WasteService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetWastedFoodResponse {
    pub data: Vec<WastedFood>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "waste",
    summary = "Get waste log",
    description = "Lists what the caller has thrown away, newest first.",
    responses(
        (status = 200, body = GetWastedFoodResponse)
    ),
)]
pub async fn get_wasted_food(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetWastedFoodResponse>, ApiError> {
    let records = state
        .service
        .get_wasted_food(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWastedFoodResponse { data: records }))
}
