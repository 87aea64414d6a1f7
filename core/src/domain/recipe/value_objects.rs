use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    food::value_objects::NewQuantifiedFood,
    recipe::entities::{InUseRecipe, Ingredient, Recipe},
};

#[derive(Debug, Clone)]
pub struct CreateRecipeInput {
    pub name: String,
    pub method: String,
    pub serves: i32,
    pub calories: Option<f64>,
    pub ingredients: Vec<NewQuantifiedFood>,
}

#[derive(Debug, Clone)]
pub struct UpdateRecipeInput {
    pub name: Option<String>,
    pub method: Option<String>,
    pub serves: Option<i32>,
    pub calories: Option<f64>,
    /// When present, replaces the whole ingredient list.
    pub ingredients: Option<Vec<NewQuantifiedFood>>,
}

#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub min_calories: Option<f64>,
    pub max_calories: Option<f64>,
    pub min_rating: Option<f64>,
    pub ingredient: Option<String>,
    pub serves: Option<i32>,
    pub mine: Option<bool>,
    pub can_make: Option<bool>,
    pub sort_by: Option<String>, // 'name' | 'calories' | 'rating'
    pub offset: u64,
    pub limit: u64,
}

/// Catalogue line: the recipe plus whether the caller's pantry covers it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecipeOverview {
    pub recipe: Recipe,
    pub can_make: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecipeDetails {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub can_make: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InUseRecipeDetails {
    pub in_use: InUseRecipe,
    pub recipe: Recipe,
}

/// One row of a consumption plan: how much to take from a pantry row and
/// what is left afterwards. `food_name` rides along for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct PantryTake {
    pub pantry_item_id: Uuid,
    pub qfood_id: Uuid,
    pub food_name: String,
    pub expected_quantity: f64,
    pub take: f64,
    pub remaining: f64,
}
