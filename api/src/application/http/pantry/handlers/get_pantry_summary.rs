use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::pantry::ports::PantryService;
use larder_core::domain::pantry::value_objects::PantrySummaryEntry;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetPantrySummaryResponse {
    pub data: Vec<PantrySummaryEntry>,
}

#[utoipa::path(
    get,
    path = "/summary",
    tag = "pantry",
    summary = "Pantry summary",
    description = "Totals per (food, unit) pair. Rows in different units stay separate.",
    responses(
        (status = 200, body = GetPantrySummaryResponse)
    ),
)]
pub async fn get_pantry_summary(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPantrySummaryResponse>, ApiError> {
    let entries = state
        .service
        .get_pantry_summary(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPantrySummaryResponse { data: entries }))
}
