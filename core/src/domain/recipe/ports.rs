use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{InUseRecipe, Ingredient, Rating, Recipe},
        value_objects::{
            CreateRecipeInput, InUseRecipeDetails, PantryTake, RecipeDetails, RecipeFilter,
            RecipeOverview, UpdateRecipeInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn fetch_recipes(
        &self,
        user_id: Uuid,
        filter: RecipeFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn fetch_ingredients(
        &self,
        recipe_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Inserts the recipe and its ingredient rows in one transaction.
    fn create_recipe(
        &self,
        recipe: Recipe,
        ingredients: Vec<Ingredient>,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Drops the old ingredient rows (and their quantified rows) and inserts
    /// the replacement list, atomically.
    fn replace_ingredients(
        &self,
        recipe_id: Uuid,
        ingredients: Vec<Ingredient>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Deletes the recipe with its ingredients, ratings and in-use markers.
    fn delete_recipe(&self, recipe_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeUsageRepository: Send + Sync {
    fn get_in_use(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<InUseRecipe>, CoreError>> + Send;

    fn find_in_use(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<InUseRecipe>, CoreError>> + Send;

    /// Commits a consumption plan atomically: marks the recipe in use,
    /// decrements each planned pantry row and deletes rows drained to zero.
    /// Every row is re-read inside the transaction and compared against the
    /// plan's expected quantity; any drift aborts the whole commit with
    /// `CoreError::InsufficientStock`.
    fn begin_use(
        &self,
        in_use: InUseRecipe,
        plan: Vec<PantryTake>,
    ) -> impl Future<Output = Result<InUseRecipe, CoreError>> + Send;

    /// Removes one in-use marker.
    fn complete_use(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RatingRepository: Send + Sync {
    fn get_for_recipe(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Rating>, CoreError>> + Send;

    /// Inserts or, when the (user, recipe) pair already rated, updates.
    fn upsert_rating(
        &self,
        rating: Rating,
    ) -> impl Future<Output = Result<Rating, CoreError>> + Send;
}

pub trait RecipePolicy: Send + Sync {
    fn can_update_recipe(
        &self,
        identity: &Identity,
        recipe: &Recipe,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_delete_recipe(
        &self,
        identity: &Identity,
        recipe: &Recipe,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn get_recipes(
        &self,
        identity: Identity,
        filter: RecipeFilter,
    ) -> impl Future<Output = Result<Vec<RecipeOverview>, CoreError>> + Send;

    fn get_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<RecipeDetails, CoreError>> + Send;

    fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<RecipeDetails, CoreError>> + Send;

    fn update_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> impl Future<Output = Result<RecipeDetails, CoreError>> + Send;

    fn delete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn rate_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        value: i32,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Moves the recipe to in-use, spending pantry stock.
    fn use_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<InUseRecipe, CoreError>> + Send;

    fn get_in_use_recipes(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<InUseRecipeDetails>, CoreError>> + Send;

    /// Finishes one in-use marker, optionally recording a rating.
    fn complete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
        rating: Option<i32>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
