use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::recipe::ports::RecipeService;
use larder_core::domain::recipe::value_objects::RecipeDetails;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetRecipeResponse {
    pub data: RecipeDetails,
}

#[utoipa::path(
    get,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    description = "Returns the recipe with its ingredients and whether the caller's pantry covers them.",
    responses(
        (status = 200, body = GetRecipeResponse),
        (status = 404, description = "No such recipe")
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
)]
pub async fn get_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let details = state
        .service
        .get_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeResponse { data: details }))
}
