use super::handlers::delete_wasted_food::{__path_delete_wasted_food, delete_wasted_food};
use super::handlers::get_wasted_food::{__path_get_wasted_food, get_wasted_food};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_wasted_food, delete_wasted_food))]
pub struct WasteApiDoc;

pub fn waste_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/waste", state.args.server.root_path),
            get(get_wasted_food),
        )
        .route(
            &format!("{}/waste/{{waste_id}}", state.args.server.root_path),
            delete(delete_wasted_food),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
