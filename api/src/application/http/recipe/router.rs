use super::handlers::complete_recipe::{__path_complete_recipe, complete_recipe};
use super::handlers::create_recipe::{__path_create_recipe, create_recipe};
use super::handlers::delete_recipe::{__path_delete_recipe, delete_recipe};
use super::handlers::get_in_use_recipes::{__path_get_in_use_recipes, get_in_use_recipes};
use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::get_recipes::{__path_get_recipes, get_recipes};
use super::handlers::rate_recipe::{__path_rate_recipe, rate_recipe};
use super::handlers::update_recipe::{__path_update_recipe, update_recipe};
use super::handlers::use_recipe::{__path_use_recipe, use_recipe};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_recipes,
    get_recipe,
    create_recipe,
    update_recipe,
    delete_recipe,
    rate_recipe,
    use_recipe,
    complete_recipe,
    get_in_use_recipes
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            get(get_recipes).post(create_recipe),
        )
        .route(
            &format!("{}/recipes/in-use", state.args.server.root_path),
            get(get_in_use_recipes),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/rating",
                state.args.server.root_path
            ),
            post(rate_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/use", state.args.server.root_path),
            post(use_recipe),
        )
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/complete",
                state.args.server.root_path
            ),
            post(complete_recipe),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
