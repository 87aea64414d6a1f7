use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::CreateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::food::value_objects::NewQuantifiedFood;
use larder_core::domain::recipe::ports::RecipeService;
use larder_core::domain::recipe::value_objects::{CreateRecipeInput, RecipeDetails};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct CreateRecipeResponse {
    pub data: RecipeDetails,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    description = "Creates a recipe owned by the caller, resolving each ingredient against the food catalogue.",
    responses(
        (status = 201, body = CreateRecipeResponse),
        (status = 400, description = "Validation failed")
    ),
    request_body = CreateRecipeValidator
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let ingredients = payload
        .ingredients
        .into_iter()
        .map(|ingredient| NewQuantifiedFood {
            food_name: ingredient.food_name,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
        })
        .collect();

    let details = state
        .service
        .create_recipe(
            identity,
            CreateRecipeInput {
                name: payload.name,
                method: payload.method,
                serves: payload.serves,
                calories: payload.calories,
                ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: details }))
}
