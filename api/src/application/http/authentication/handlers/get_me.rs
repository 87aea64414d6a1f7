use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::user::entities::User;
use larder_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMeResponse {
    pub data: User,
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current user",
    description = "Returns the profile of the authenticated caller.",
    responses(
        (status = 200, body = GetMeResponse),
        (status = 401, description = "No live session")
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMeResponse>, ApiError> {
    let user = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMeResponse { data: user }))
}
