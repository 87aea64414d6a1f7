use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::RateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::recipe::entities::Recipe;
use larder_core::domain::recipe::ports::RecipeService;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct RateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/rating",
    tag = "recipe",
    summary = "Rate recipe",
    description = "Submits a 1-5 rating. Rating the same recipe again overwrites the caller's \
        previous value; the recipe's rating becomes the mean over all raters.",
    responses(
        (status = 200, body = RateRecipeResponse),
        (status = 404, description = "No such recipe")
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = RateRecipeValidator
)]
pub async fn rate_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<RateRecipeValidator>,
) -> Result<Response<RateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .rate_recipe(identity, recipe_id, payload.value)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RateRecipeResponse { data: recipe }))
}
