use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHealthResponse {
    pub status: String,
    pub response_time_ms: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness",
    description = "Pings the database and reports the round trip.",
    responses(
        (status = 200, body = GetHealthResponse),
        (status = 500, description = "Database unreachable")
    ),
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<GetHealthResponse>, ApiError> {
    let response_time_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetHealthResponse {
        status: "ok".to_string(),
        response_time_ms,
    }))
}
