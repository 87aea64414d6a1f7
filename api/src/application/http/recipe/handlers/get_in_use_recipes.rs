use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::recipe::ports::RecipeService;
use larder_core::domain::recipe::value_objects::InUseRecipeDetails;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetInUseRecipesResponse {
    pub data: Vec<InUseRecipeDetails>,
}

#[utoipa::path(
    get,
    path = "/in-use",
    tag = "recipe",
    summary = "Get in-use recipes",
    description = "Lists the recipes the caller is currently cooking, oldest first.",
    responses(
        (status = 200, body = GetInUseRecipesResponse)
    ),
)]
pub async fn get_in_use_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetInUseRecipesResponse>, ApiError> {
    let in_use = state
        .service
        .get_in_use_recipes(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetInUseRecipesResponse { data: in_use }))
}
