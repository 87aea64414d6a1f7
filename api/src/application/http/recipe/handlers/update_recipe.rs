use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::UpdateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::food::value_objects::NewQuantifiedFood;
use larder_core::domain::recipe::ports::RecipeService;
use larder_core::domain::recipe::value_objects::{RecipeDetails, UpdateRecipeInput};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct UpdateRecipeResponse {
    pub data: RecipeDetails,
}

#[utoipa::path(
    put,
    path = "/{recipe_id}",
    tag = "recipe",
    summary = "Update recipe",
    description = "Updates fields of a recipe the caller owns. Sending `ingredients` replaces the whole list.",
    responses(
        (status = 200, body = UpdateRecipeResponse),
        (status = 403, description = "Someone else's recipe"),
        (status = 404, description = "No such recipe")
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = UpdateRecipeValidator
)]
pub async fn update_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Response<UpdateRecipeResponse>, ApiError> {
    let ingredients = payload.ingredients.map(|list| {
        list.into_iter()
            .map(|ingredient| NewQuantifiedFood {
                food_name: ingredient.food_name,
                quantity: ingredient.quantity,
                unit: ingredient.unit,
            })
            .collect()
    });

    let details = state
        .service
        .update_recipe(
            identity,
            recipe_id,
            UpdateRecipeInput {
                name: payload.name,
                method: payload.method,
                serves: payload.serves,
                calories: payload.calories,
                ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateRecipeResponse { data: details }))
}
