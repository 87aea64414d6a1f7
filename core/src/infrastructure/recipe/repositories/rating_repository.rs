use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Rating, ports::RatingRepository},
    },
    entity::ratings::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRatingRepository {
    pub db: DatabaseConnection,
}

impl PostgresRatingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RatingRepository for PostgresRatingRepository {
    async fn get_for_recipe(&self, recipe_id: Uuid) -> Result<Vec<Rating>, CoreError> {
        let ratings = Entity::find()
            .filter(Column::RecipeId.eq(recipe_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ratings: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ratings.iter().map(Rating::from).collect())
    }

    async fn upsert_rating(&self, rating: Rating) -> Result<Rating, CoreError> {
        let active_model = ActiveModel {
            id: Set(rating.id),
            user_id: Set(rating.user_id),
            recipe_id: Set(rating.recipe_id),
            value: Set(rating.value),
            created_at: Set(rating.created_at.fixed_offset()),
            updated_at: Set(rating.updated_at.fixed_offset()),
        };

        let saved = Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::RecipeId])
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert rating: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Rating::from(saved))
    }
}
