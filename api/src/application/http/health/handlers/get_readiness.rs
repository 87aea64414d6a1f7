use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::health::entities::DatabaseHealthStatus;
use larder_core::domain::health::ports::HealthCheckService;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetReadinessResponse {
    pub database: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/readiness",
    tag = "health",
    summary = "Readiness",
    description = "Reports whether the database answers and how fast.",
    responses(
        (status = 200, body = GetReadinessResponse),
        (status = 500, description = "Database unreachable")
    ),
)]
pub async fn get_readiness(
    State(state): State<AppState>,
) -> Result<Response<GetReadinessResponse>, ApiError> {
    let database = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetReadinessResponse { database }))
}
