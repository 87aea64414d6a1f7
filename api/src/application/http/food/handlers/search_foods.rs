use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use larder_core::domain::food::entities::FoodItem;
use larder_core::domain::food::ports::FoodService;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchFoodsQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchFoodsResponse {
    pub data: Vec<FoodItem>,
}

#[utoipa::path(
    get,
    path = "/foods",
    tag = "food",
    summary = "Search foods",
    description = "Case-insensitive substring search over the food catalogue, for form autocompletion.",
    params(SearchFoodsQuery),
    responses(
        (status = 200, body = SearchFoodsResponse)
    ),
)]
pub async fn search_foods(
    Query(query): Query<SearchFoodsQuery>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let foods = state
        .service
        .search_food_items(query.name.unwrap_or_default())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchFoodsResponse { data: foods }))
}
