use crate::application::auth::RequiredIdentity;
use crate::application::http::query_params::{FilterOperator, QueryParams, QueryParamsExtractor};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::recipe::ports::RecipeService;
use larder_core::domain::recipe::value_objects::{RecipeFilter, RecipeOverview};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<RecipeOverview>,
}

/// Maps the generic query grammar onto the recipe filter. Unknown fields and
/// operator combinations are ignored rather than rejected.
fn to_recipe_filter(params: QueryParams) -> RecipeFilter {
    let mut filter = RecipeFilter {
        offset: params.pagination.offset,
        limit: params.pagination.limit,
        ..Default::default()
    };

    for condition in &params.filter.conditions {
        match (condition.field.as_str(), &condition.operator) {
            ("calories", FilterOperator::Gte) => filter.min_calories = condition.value.parse().ok(),
            ("calories", FilterOperator::Lte) => filter.max_calories = condition.value.parse().ok(),
            ("rating", FilterOperator::Gte) => filter.min_rating = condition.value.parse().ok(),
            ("ingredient", FilterOperator::Ilike) | ("ingredient", FilterOperator::Eq) => {
                filter.ingredient = Some(condition.value.clone());
            }
            ("serves", FilterOperator::Eq) => filter.serves = condition.value.parse().ok(),
            ("mine", FilterOperator::Eq) => filter.mine = condition.value.parse().ok(),
            ("can_make", FilterOperator::Eq) => filter.can_make = condition.value.parse().ok(),
            _ => {}
        }
    }

    if let Some(sort) = params.sort.sorts.first() {
        filter.sort_by = Some(sort.field.clone());
    }

    filter
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Get recipes",
    description = "Lists recipes with optional filters: `filter[calories][gte|lte]`, \
        `filter[rating][gte]`, `filter[ingredient][ilike]`, `filter[serves]`, `filter[mine]`, \
        `filter[can_make]`; `sort` over name, calories or rating; `offset`/`limit`.",
    responses(
        (status = 200, body = GetRecipesResponse)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryParamsExtractor(params): QueryParamsExtractor,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .get_recipes(identity, to_recipe_filter(params))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data: recipes }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn params(entries: &[(&str, &str)]) -> QueryParams {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        QueryParams::from_query_map(&map)
    }

    #[test]
    fn maps_the_documented_conditions() {
        let filter = to_recipe_filter(params(&[
            ("filter[calories][gte]", "100"),
            ("filter[calories][lte]", "600"),
            ("filter[rating][gte]", "3.5"),
            ("filter[ingredient][ilike]", "flour"),
            ("filter[serves]", "4"),
            ("filter[mine]", "true"),
            ("filter[can_make]", "true"),
            ("sort", "calories"),
            ("offset", "10"),
            ("limit", "20"),
        ]));

        assert_eq!(filter.min_calories, Some(100.0));
        assert_eq!(filter.max_calories, Some(600.0));
        assert_eq!(filter.min_rating, Some(3.5));
        assert_eq!(filter.ingredient.as_deref(), Some("flour"));
        assert_eq!(filter.serves, Some(4));
        assert_eq!(filter.mine, Some(true));
        assert_eq!(filter.can_make, Some(true));
        assert_eq!(filter.sort_by.as_deref(), Some("calories"));
        assert_eq!(filter.offset, 10);
        assert_eq!(filter.limit, 20);
    }

    #[test]
    fn ignores_unknown_fields_and_bad_numbers() {
        let filter = to_recipe_filter(params(&[
            ("filter[calories][gte]", "not-a-number"),
            ("filter[color]", "green"),
        ]));

        assert_eq!(filter.min_calories, None);
        assert_eq!(filter.ingredient, None);
        assert_eq!(filter.sort_by, None);
    }
}
