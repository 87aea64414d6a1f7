use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::pantry::entities::PantryItem;
use larder_core::domain::pantry::ports::PantryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPantryResponse {
    pub data: Vec<PantryItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "pantry",
    summary = "Get pantry",
    description = "Lists every pantry item belonging to the caller.",
    responses(
        (status = 200, body = GetPantryResponse)
    ),
)]
pub async fn get_pantry(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPantryResponse>, ApiError> {
    let items = state
        .service
        .get_pantry(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPantryResponse { data: items }))
}
