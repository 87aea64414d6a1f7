use super::handlers::add_shopping_item::{__path_add_shopping_item, add_shopping_item};
use super::handlers::complete_shopping_list::{
    __path_complete_shopping_list, complete_shopping_list,
};
use super::handlers::create_list_from_recipe::{
    __path_create_list_from_recipe, create_list_from_recipe,
};
use super::handlers::create_shopping_list::{__path_create_shopping_list, create_shopping_list};
use super::handlers::delete_shopping_list::{__path_delete_shopping_list, delete_shopping_list};
use super::handlers::get_shopping_list::{__path_get_shopping_list, get_shopping_list};
use super::handlers::get_shopping_lists::{__path_get_shopping_lists, get_shopping_lists};
use super::handlers::remove_shopping_item::{__path_remove_shopping_item, remove_shopping_item};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_shopping_lists,
    create_shopping_list,
    get_shopping_list,
    delete_shopping_list,
    add_shopping_item,
    remove_shopping_item,
    complete_shopping_list,
    create_list_from_recipe
))]
pub struct ShoppingApiDoc;

pub fn shopping_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/shopping-lists", state.args.server.root_path),
            get(get_shopping_lists).post(create_shopping_list),
        )
        .route(
            &format!(
                "{}/shopping-lists/from-recipe/{{recipe_id}}",
                state.args.server.root_path
            ),
            post(create_list_from_recipe),
        )
        .route(
            &format!(
                "{}/shopping-lists/{{list_id}}",
                state.args.server.root_path
            ),
            get(get_shopping_list).delete(delete_shopping_list),
        )
        .route(
            &format!(
                "{}/shopping-lists/{{list_id}}/items",
                state.args.server.root_path
            ),
            post(add_shopping_item),
        )
        .route(
            &format!(
                "{}/shopping-lists/{{list_id}}/items/{{item_id}}",
                state.args.server.root_path
            ),
            delete(remove_shopping_item),
        )
        .route(
            &format!(
                "{}/shopping-lists/{{list_id}}/complete",
                state.args.server.root_path
            ),
            post(complete_shopping_list),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
