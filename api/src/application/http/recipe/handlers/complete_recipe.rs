use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::CompleteRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CompleteRecipeResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/complete",
    tag = "recipe",
    summary = "Complete recipe",
    description = "Finishes one in-use marker for the recipe, optionally recording a rating.",
    responses(
        (status = 200, body = CompleteRecipeResponse),
        (status = 404, description = "Recipe is not in use")
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = CompleteRecipeValidator
)]
pub async fn complete_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CompleteRecipeValidator>,
) -> Result<Response<CompleteRecipeResponse>, ApiError> {
    state
        .service
        .complete_recipe(identity, recipe_id, payload.rating)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CompleteRecipeResponse {
        message: "Recipe completed".to_string(),
    }))
}
