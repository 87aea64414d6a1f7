use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::recipe::entities::InUseRecipe;
use larder_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UseRecipeResponse {
    pub data: InUseRecipe,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/use",
    tag = "recipe",
    summary = "Use recipe",
    description = "Starts cooking: subtracts every ingredient from the pantry and marks the \
        recipe in use. Fails without touching the pantry when any ingredient is short.",
    responses(
        (status = 200, body = UseRecipeResponse),
        (status = 400, description = "Not enough of an ingredient in the pantry"),
        (status = 404, description = "No such recipe")
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
)]
pub async fn use_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<UseRecipeResponse>, ApiError> {
    let in_use = state
        .service
        .use_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UseRecipeResponse { data: in_use }))
}
