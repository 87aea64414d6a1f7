use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use larder_core::domain::shopping::ports::ShoppingService;
use larder_core::domain::shopping::value_objects::ShoppingListDetails;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct CreateListFromRecipeResponse {
    pub data: ShoppingListDetails,
}

#[utoipa::path(
    post,
    path = "/from-recipe/{recipe_id}",
    tag = "shopping-list",
    summary = "Shopping list from recipe",
    description = "Builds the delta list for a recipe: only what the pantry does not already \
        cover, compared per (food, unit) pair. A fully stocked pantry yields an empty list.",
    responses(
        (status = 201, body = CreateListFromRecipeResponse),
        (status = 404, description = "No such recipe")
    ),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
)]
pub async fn create_list_from_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<CreateListFromRecipeResponse>, ApiError> {
    let details = state
        .service
        .create_list_from_recipe(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateListFromRecipeResponse {
        data: details,
    }))
}
