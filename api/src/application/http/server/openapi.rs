use crate::application::http::{
    authentication::router::AuthenticationApiDoc, food::router::FoodApiDoc,
    health::router::HealthApiDoc, pantry::router::PantryApiDoc, recipe::router::RecipeApiDoc,
    shopping::router::ShoppingApiDoc, waste::router::WasteApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/pantry", api = PantryApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/shopping-lists", api = ShoppingApiDoc),
        (path = "/waste", api = WasteApiDoc),
        // utoipa rejects an empty path literal in nest(); an expression
        // evaluating to "" nests the food paths at the root unchanged.
        (path = {""}, api = FoodApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
