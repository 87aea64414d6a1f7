use super::handlers::lookup_barcode::{__path_lookup_barcode, lookup_barcode};
use super::handlers::register_barcode::{__path_register_barcode, register_barcode};
use super::handlers::search_foods::{__path_search_foods, search_foods};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_foods, register_barcode, lookup_barcode))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/foods", state.args.server.root_path),
            get(search_foods),
        )
        .route(
            &format!("{}/barcodes", state.args.server.root_path),
            post(register_barcode),
        )
        .route(
            &format!("{}/barcodes/{{barcode}}", state.args.server.root_path),
            get(lookup_barcode),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
