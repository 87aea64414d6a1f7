use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        recipe::{
            entities::InUseRecipe, helpers::EPSILON, ports::RecipeUsageRepository,
            value_objects::PantryTake,
        },
    },
    entity::{
        in_use_recipes::{ActiveModel, Column, Entity},
        pantry_items::{ActiveModel as PantryActiveModel, Column as PantryColumn, Entity as PantryEntity},
        quantified_food_items::{
            ActiveModel as QuantifiedActiveModel, Column as QuantifiedColumn,
            Entity as QuantifiedEntity,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeUsageRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeUsageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeUsageRepository for PostgresRecipeUsageRepository {
    async fn get_in_use(&self, user_id: Uuid) -> Result<Vec<InUseRecipe>, CoreError> {
        let markers = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::StartedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get in-use recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(markers.iter().map(InUseRecipe::from).collect())
    }

    async fn find_in_use(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<InUseRecipe>, CoreError> {
        let marker = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::RecipeId.eq(recipe_id))
            .order_by_asc(Column::StartedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find in-use recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(marker.map(InUseRecipe::from))
    }

    async fn begin_use(
        &self,
        in_use: InUseRecipe,
        plan: Vec<PantryTake>,
    ) -> Result<InUseRecipe, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        for take in &plan {
            // SELECT ... FOR UPDATE: a competing use of the same row blocks
            // here until this commit lands, then sees the decremented quantity.
            let quantified = QuantifiedEntity::find_by_id(take.qfood_id)
                .lock_exclusive()
                .one(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to re-read quantified food: {}", e);
                    CoreError::InternalServerError
                })?;

            // The plan was made against a snapshot; any drift since then
            // invalidates it and the whole commit rolls back.
            let stale = match &quantified {
                Some(row) => (row.quantity - take.expected_quantity).abs() > EPSILON,
                None => true,
            };
            if stale {
                return Err(CoreError::InsufficientStock {
                    food: take.food_name.clone(),
                });
            }

            if take.remaining <= 0.0 {
                PantryEntity::delete_many()
                    .filter(PantryColumn::Id.eq(take.pantry_item_id))
                    .exec(&txn)
                    .await
                    .map_err(|e| {
                        error!("Failed to delete pantry item: {}", e);
                        CoreError::InternalServerError
                    })?;

                QuantifiedEntity::delete_many()
                    .filter(QuantifiedColumn::Id.eq(take.qfood_id))
                    .exec(&txn)
                    .await
                    .map_err(|e| {
                        error!("Failed to delete quantified food: {}", e);
                        CoreError::InternalServerError
                    })?;
            } else {
                QuantifiedEntity::update(QuantifiedActiveModel {
                    id: Set(take.qfood_id),
                    quantity: Set(take.remaining),
                    ..Default::default()
                })
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to update quantified food: {}", e);
                    CoreError::InternalServerError
                })?;

                let (now, _) = generate_timestamp();
                PantryEntity::update(PantryActiveModel {
                    id: Set(take.pantry_item_id),
                    updated_at: Set(now.fixed_offset()),
                    ..Default::default()
                })
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to touch pantry item: {}", e);
                    CoreError::InternalServerError
                })?;
            }
        }

        let created = Entity::insert(ActiveModel {
            id: Set(in_use.id),
            user_id: Set(in_use.user_id),
            recipe_id: Set(in_use.recipe_id),
            started_at: Set(in_use.started_at.fixed_offset()),
        })
        .exec_with_returning(&txn)
        .await
        .map_err(|e| {
            error!("Failed to create in-use marker: {}", e);
            CoreError::InternalServerError
        })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(InUseRecipe::from(created))
    }

    async fn complete_use(&self, id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete in-use marker: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;
    use crate::entity::{
        in_use_recipes::Model as InUseModel, pantry_items::Model as PantryModel,
        quantified_food_items::Model as QuantifiedModel,
    };

    fn flour_take(pantry_item_id: Uuid, qfood_id: Uuid) -> PantryTake {
        PantryTake {
            pantry_item_id,
            qfood_id,
            food_name: "flour".to_string(),
            expected_quantity: 500.0,
            take: 200.0,
            remaining: 300.0,
        }
    }

    #[tokio::test]
    async fn begin_use_locks_stock_rows_while_spending() {
        let in_use = InUseRecipe::new(Uuid::new_v4(), Uuid::new_v4());
        let pantry_item_id = Uuid::new_v4();
        let qfood_id = Uuid::new_v4();
        let (now, _) = generate_timestamp();

        let stock = QuantifiedModel {
            id: qfood_id,
            food_id: Uuid::new_v4(),
            quantity: 500.0,
            unit: "g".to_string(),
        };
        let spent = QuantifiedModel {
            quantity: 300.0,
            ..stock.clone()
        };
        let pantry_row = PantryModel {
            id: pantry_item_id,
            user_id: in_use.user_id,
            quantified_food_id: qfood_id,
            expiry: None,
            created_at: now.fixed_offset(),
            updated_at: now.fixed_offset(),
        };
        let marker = InUseModel {
            id: in_use.id,
            user_id: in_use.user_id,
            recipe_id: in_use.recipe_id,
            started_at: in_use.started_at.fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stock]])
            .append_query_results([vec![spent]])
            .append_query_results([vec![pantry_row]])
            .append_query_results([vec![marker]])
            .into_connection();

        let repository = PostgresRecipeUsageRepository::new(db.clone());
        let plan = vec![flour_take(pantry_item_id, qfood_id)];

        let created = repository
            .begin_use(in_use.clone(), plan)
            .await
            .expect("plan matches stock");
        assert_eq!(created, in_use);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statements = format!("{:?}", log[0]);
        assert!(statements.contains("FOR UPDATE"));
        assert!(statements.contains(r#"UPDATE "quantified_food_items""#));
        assert!(statements.contains(r#"INSERT INTO "in_use_recipes""#));
    }

    #[tokio::test]
    async fn begin_use_rejects_a_plan_made_against_changed_stock() {
        let qfood_id = Uuid::new_v4();

        // A competing use committed first: the row holds less than planned.
        let shrunken = QuantifiedModel {
            id: qfood_id,
            food_id: Uuid::new_v4(),
            quantity: 300.0,
            unit: "g".to_string(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![shrunken]])
            .into_connection();

        let repository = PostgresRecipeUsageRepository::new(db);
        let plan = vec![flour_take(Uuid::new_v4(), qfood_id)];

        let err = repository
            .begin_use(InUseRecipe::new(Uuid::new_v4(), Uuid::new_v4()), plan)
            .await
            .expect_err("stale plan must not spend stock");

        assert_eq!(
            err,
            CoreError::InsufficientStock {
                food: "flour".to_string()
            }
        );
    }
}
