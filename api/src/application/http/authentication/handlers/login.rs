use std::net::SocketAddr;

use crate::application::http::authentication::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{ConnectInfo, State};
use chrono::{DateTime, Utc};
use larder_core::domain::authentication::ports::AuthenticationService;
use larder_core::domain::authentication::value_objects::LoginInput;
use larder_core::domain::user::entities::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in",
    description = "Verifies the credentials and opens a session.",
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    request_body = LoginValidator
)]
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let session = state
        .service
        .login(LoginInput {
            email: payload.email,
            password: payload.password,
            ip: Some(addr.ip().to_string()),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        user: session.user,
        token: session.token,
        expires_at: session.expires_at,
    }))
}
