use crate::application::http::authentication::validators::RegisterValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use chrono::{DateTime, Utc};
use larder_core::domain::authentication::ports::AuthenticationService;
use larder_core::domain::authentication::value_objects::RegisterUserInput;
use larder_core::domain::user::entities::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RegisterResponse {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register",
    description = "Creates an account and opens a session for it.",
    responses(
        (status = 201, body = RegisterResponse),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already taken")
    ),
    request_body = RegisterValidator
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<RegisterResponse>, ApiError> {
    let session = state
        .service
        .register(RegisterUserInput {
            email: payload.email,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
            date_of_birth: payload.date_of_birth,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterResponse {
        user: session.user,
        token: session.token,
        expires_at: session.expires_at,
    }))
}
