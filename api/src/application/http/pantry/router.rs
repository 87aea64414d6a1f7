use super::handlers::add_pantry_item::{__path_add_pantry_item, add_pantry_item};
use super::handlers::add_pantry_item_by_barcode::{
    __path_add_pantry_item_by_barcode, add_pantry_item_by_barcode,
};
use super::handlers::delete_pantry_item::{__path_delete_pantry_item, delete_pantry_item};
use super::handlers::discard_pantry_item::{__path_discard_pantry_item, discard_pantry_item};
use super::handlers::get_pantry::{__path_get_pantry, get_pantry};
use super::handlers::get_pantry_summary::{__path_get_pantry_summary, get_pantry_summary};
use super::handlers::update_pantry_item::{__path_update_pantry_item, update_pantry_item};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_pantry,
    get_pantry_summary,
    add_pantry_item,
    add_pantry_item_by_barcode,
    update_pantry_item,
    delete_pantry_item,
    discard_pantry_item
))]
pub struct PantryApiDoc;

pub fn pantry_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/pantry", state.args.server.root_path),
            get(get_pantry).post(add_pantry_item),
        )
        .route(
            &format!("{}/pantry/summary", state.args.server.root_path),
            get(get_pantry_summary),
        )
        .route(
            &format!("{}/pantry/barcode/{{barcode}}", state.args.server.root_path),
            post(add_pantry_item_by_barcode),
        )
        .route(
            &format!("{}/pantry/{{item_id}}", state.args.server.root_path),
            put(update_pantry_item).delete(delete_pantry_item),
        )
        .route(
            &format!(
                "{}/pantry/{{item_id}}/discard",
                state.args.server.root_path
            ),
            post(discard_pantry_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
