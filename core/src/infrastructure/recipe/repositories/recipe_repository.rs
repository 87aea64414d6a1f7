use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
    prelude::Expr,
    sea_query::extension::postgres::PgExpr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{Ingredient, Recipe},
            ports::RecipeRepository,
            value_objects::RecipeFilter,
        },
    },
    entity::{
        food_items::{Column as FoodColumn, Entity as FoodEntity},
        in_use_recipes::{Column as InUseColumn, Entity as InUseEntity},
        ingredients::{
            ActiveModel as IngredientActiveModel, Column as IngredientColumn,
            Entity as IngredientEntity,
        },
        quantified_food_items::{Column as QuantifiedColumn, Entity as QuantifiedEntity},
        ratings::{Column as RatingColumn, Entity as RatingEntity},
        recipes::{ActiveModel, Column, Entity},
    },
    infrastructure::{food::repositories::food_repository::load_quantified, recipe::mappers::map_ingredient},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pre-pass for the ingredient filter: food names matching the pattern,
    /// narrowed down to the recipes that use them.
    async fn recipes_with_ingredient(&self, pattern: &str) -> Result<Vec<Uuid>, CoreError> {
        let foods = FoodEntity::find()
            .filter(Expr::col(FoodColumn::Name).ilike(format!("%{}%", pattern)))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search food items: {}", e);
                CoreError::InternalServerError
            })?;

        let food_ids: Vec<Uuid> = foods.iter().map(|f| f.id).collect();
        if food_ids.is_empty() {
            return Ok(Vec::new());
        }

        let quantified = QuantifiedEntity::find()
            .filter(QuantifiedColumn::FoodId.is_in(food_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load quantified food: {}", e);
                CoreError::InternalServerError
            })?;

        let qfood_ids: Vec<Uuid> = quantified.iter().map(|q| q.id).collect();
        if qfood_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = IngredientEntity::find()
            .filter(IngredientColumn::QuantifiedFoodId.is_in(qfood_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.iter().map(|row| row.recipe_id).collect())
    }

    async fn map_ingredient_rows(
        &self,
        rows: Vec<crate::entity::ingredients::Model>,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let qfood_ids: Vec<Uuid> = rows.iter().map(|r| r.quantified_food_id).collect();
        let mut qfoods = load_quantified(&self.db, qfood_ids).await?;

        Ok(rows
            .iter()
            .filter_map(|row| {
                qfoods
                    .remove(&row.quantified_food_id)
                    .map(|qfood| map_ingredient(row, qfood))
            })
            .collect())
    }
}

fn to_active_model(recipe: &Recipe) -> ActiveModel {
    ActiveModel {
        id: Set(recipe.id),
        user_id: Set(recipe.user_id),
        name: Set(recipe.name.clone()),
        method: Set(recipe.method.clone()),
        serves: Set(recipe.serves),
        calories: Set(recipe.calories),
        rating: Set(recipe.rating),
        created_at: Set(recipe.created_at.fixed_offset()),
        updated_at: Set(recipe.updated_at.fixed_offset()),
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipe.map(Recipe::from))
    }

    async fn fetch_recipes(
        &self,
        user_id: Uuid,
        filter: RecipeFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        let mut condition = Condition::all();

        if let Some(min_calories) = filter.min_calories {
            condition = condition.add(Column::Calories.gte(min_calories));
        }

        if let Some(max_calories) = filter.max_calories {
            condition = condition.add(Column::Calories.lte(max_calories));
        }

        if let Some(min_rating) = filter.min_rating {
            condition = condition.add(Column::Rating.gte(min_rating));
        }

        if let Some(serves) = filter.serves {
            condition = condition.add(Column::Serves.eq(serves));
        }

        if filter.mine.unwrap_or(false) {
            condition = condition.add(Column::UserId.eq(user_id));
        }

        if let Some(ref ingredient) = filter.ingredient {
            let recipe_ids = self.recipes_with_ingredient(ingredient).await?;
            if recipe_ids.is_empty() {
                return Ok(Vec::new());
            }
            condition = condition.add(Column::Id.is_in(recipe_ids));
        }

        let mut query = Entity::find().filter(condition);

        query = match filter.sort_by.as_deref() {
            Some("calories") => query.order_by_asc(Column::Calories),
            Some("rating") => query.order_by_desc(Column::Rating),
            _ => query.order_by_asc(Column::Name),
        };

        if filter.offset > 0 {
            query = query.offset(filter.offset);
        }

        if filter.limit > 0 {
            query = query.limit(filter.limit);
        }

        let recipes = query.all(&self.db).await.map_err(|e| {
            error!("Failed to fetch recipes: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(recipes.iter().map(Recipe::from).collect())
    }

    async fn get_ingredients(&self, recipe_id: Uuid) -> Result<Vec<Ingredient>, CoreError> {
        let rows = IngredientEntity::find()
            .filter(IngredientColumn::RecipeId.eq(recipe_id))
            .order_by_asc(IngredientColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        self.map_ingredient_rows(rows).await
    }

    async fn fetch_ingredients(&self, recipe_ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = IngredientEntity::find()
            .filter(IngredientColumn::RecipeId.is_in(recipe_ids))
            .order_by_asc(IngredientColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        self.map_ingredient_rows(rows).await
    }

    async fn create_recipe(
        &self,
        recipe: Recipe,
        ingredients: Vec<Ingredient>,
    ) -> Result<Recipe, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let created = Entity::insert(to_active_model(&recipe))
            .exec_with_returning(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        if !ingredients.is_empty() {
            let models: Vec<IngredientActiveModel> = ingredients
                .iter()
                .map(|ingredient| IngredientActiveModel {
                    id: Set(ingredient.id),
                    recipe_id: Set(ingredient.recipe_id),
                    quantified_food_id: Set(ingredient.qfood.id),
                })
                .collect();

            IngredientEntity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create ingredients: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Recipe::from(created))
    }

    async fn update_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let updated = Entity::update(to_active_model(&recipe))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Recipe::from(updated))
    }

    async fn replace_ingredients(
        &self,
        recipe_id: Uuid,
        ingredients: Vec<Ingredient>,
    ) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let old_rows = IngredientEntity::find()
            .filter(IngredientColumn::RecipeId.eq(recipe_id))
            .all(&txn)
            .await
            .map_err(|e| {
                error!("Failed to load ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        IngredientEntity::delete_many()
            .filter(IngredientColumn::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        let old_qfood_ids: Vec<Uuid> = old_rows.iter().map(|r| r.quantified_food_id).collect();
        if !old_qfood_ids.is_empty() {
            QuantifiedEntity::delete_many()
                .filter(QuantifiedColumn::Id.is_in(old_qfood_ids))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to delete quantified food: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        if !ingredients.is_empty() {
            let models: Vec<IngredientActiveModel> = ingredients
                .iter()
                .map(|ingredient| IngredientActiveModel {
                    id: Set(ingredient.id),
                    recipe_id: Set(ingredient.recipe_id),
                    quantified_food_id: Set(ingredient.qfood.id),
                })
                .collect();

            IngredientEntity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create ingredients: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let ingredient_rows = IngredientEntity::find()
            .filter(IngredientColumn::RecipeId.eq(recipe_id))
            .all(&txn)
            .await
            .map_err(|e| {
                error!("Failed to load ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        InUseEntity::delete_many()
            .filter(InUseColumn::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete in-use markers: {}", e);
                CoreError::InternalServerError
            })?;

        RatingEntity::delete_many()
            .filter(RatingColumn::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete ratings: {}", e);
                CoreError::InternalServerError
            })?;

        IngredientEntity::delete_many()
            .filter(IngredientColumn::RecipeId.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        let qfood_ids: Vec<Uuid> = ingredient_rows.iter().map(|r| r.quantified_food_id).collect();
        if !qfood_ids.is_empty() {
            QuantifiedEntity::delete_many()
                .filter(QuantifiedColumn::Id.is_in(qfood_ids))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to delete quantified food: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        Entity::delete_many()
            .filter(Column::Id.eq(recipe_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }
}
