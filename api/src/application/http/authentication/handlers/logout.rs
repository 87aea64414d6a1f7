use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use larder_core::domain::authentication::ports::AuthenticationService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LogoutResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    summary = "Log out",
    description = "Deletes the session behind the presented token.",
    responses(
        (status = 200, body = LogoutResponse),
        (status = 401, description = "No live session")
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
) -> Result<Response<LogoutResponse>, ApiError> {
    state
        .service
        .logout(bearer.token().to_string())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LogoutResponse {
        message: "Logged out".to_string(),
    }))
}
