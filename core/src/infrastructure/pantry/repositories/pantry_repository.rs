use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pantry::{entities::PantryItem, ports::PantryRepository},
    },
    entity::{
        pantry_items::{ActiveModel, Column, Entity},
        quantified_food_items::{
            ActiveModel as QuantifiedActiveModel, Column as QuantifiedColumn,
            Entity as QuantifiedEntity,
        },
    },
    infrastructure::{
        food::repositories::food_repository::{load_quantified, load_quantified_one},
        pantry::mappers::map_item,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresPantryRepository {
    pub db: DatabaseConnection,
}

impl PostgresPantryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PantryRepository for PostgresPantryRepository {
    async fn get_items(&self, user_id: Uuid) -> Result<Vec<PantryItem>, CoreError> {
        // Ids are v7, so id order is insertion order. Consumption planning
        // breaks equal-expiry ties by draining the oldest row first.
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get pantry items: {}", e);
                CoreError::InternalServerError
            })?;

        let qfood_ids: Vec<Uuid> = rows.iter().map(|r| r.quantified_food_id).collect();
        let mut qfoods = load_quantified(&self.db, qfood_ids).await?;

        Ok(rows
            .iter()
            .filter_map(|row| {
                qfoods
                    .remove(&row.quantified_food_id)
                    .map(|qfood| map_item(row, qfood))
            })
            .collect())
    }

    async fn get_item(&self, user_id: Uuid, item_id: Uuid) -> Result<Option<PantryItem>, CoreError> {
        let row = Entity::find()
            .filter(Column::Id.eq(item_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get pantry item: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let qfood = load_quantified_one(&self.db, row.quantified_food_id).await?;

        Ok(Some(map_item(&row, qfood)))
    }

    async fn create_item(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        let active_model = ActiveModel {
            id: Set(item.id),
            user_id: Set(item.user_id),
            quantified_food_id: Set(item.qfood.id),
            expiry: Set(item.expiry.clone()),
            created_at: Set(item.created_at.fixed_offset()),
            updated_at: Set(item.updated_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create pantry item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(item)
    }

    async fn update_item(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let quantified = QuantifiedActiveModel {
            id: Set(item.qfood.id),
            food_id: Set(item.qfood.food_id),
            quantity: Set(item.qfood.quantity),
            unit: Set(item.qfood.unit.clone()),
        };

        QuantifiedEntity::update(quantified)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to update quantified food: {}", e);
                CoreError::InternalServerError
            })?;

        let active_model = ActiveModel {
            id: Set(item.id),
            user_id: Set(item.user_id),
            quantified_food_id: Set(item.qfood.id),
            expiry: Set(item.expiry.clone()),
            created_at: Set(item.created_at.fixed_offset()),
            updated_at: Set(item.updated_at.fixed_offset()),
        };

        Entity::update(active_model)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to update pantry item: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(item)
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let row = Entity::find_by_id(item_id).one(&txn).await.map_err(|e| {
            error!("Failed to get pantry item: {}", e);
            CoreError::InternalServerError
        })?;

        let Some(row) = row else {
            return Ok(());
        };

        Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete pantry item: {}", e);
                CoreError::InternalServerError
            })?;

        QuantifiedEntity::delete_many()
            .filter(QuantifiedColumn::Id.eq(row.quantified_food_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete quantified food: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::*;
    use crate::{
        domain::food::entities::QuantifiedFood,
        entity::{
            pantry_items::Model as PantryModel, quantified_food_items::Model as QuantifiedModel,
        },
    };

    fn sample_item(user_id: Uuid) -> PantryItem {
        PantryItem::new(
            user_id,
            QuantifiedFood {
                id: Uuid::new_v4(),
                food_id: Uuid::new_v4(),
                name: "flour".to_string(),
                quantity: 500.0,
                unit: "g".to_string(),
            },
            None,
        )
    }

    #[tokio::test]
    async fn get_items_orders_rows_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<PantryModel>::new()])
            .into_connection();

        let repository = PostgresPantryRepository::new(db.clone());
        let items = repository
            .get_items(Uuid::new_v4())
            .await
            .expect("query runs");
        assert!(items.is_empty());

        let log = db.into_transaction_log();
        let statements = format!("{:?}", log);
        assert!(statements.contains(r#"ORDER BY "pantry_items"."id" ASC"#));
    }

    #[tokio::test]
    async fn update_item_writes_both_rows_in_one_transaction() {
        let item = sample_item(Uuid::new_v4());
        let quantified_row = QuantifiedModel {
            id: item.qfood.id,
            food_id: item.qfood.food_id,
            quantity: item.qfood.quantity,
            unit: item.qfood.unit.clone(),
        };
        let pantry_row = PantryModel {
            id: item.id,
            user_id: item.user_id,
            quantified_food_id: item.qfood.id,
            expiry: None,
            created_at: item.created_at.fixed_offset(),
            updated_at: item.updated_at.fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![quantified_row]])
            .append_query_results([vec![pantry_row]])
            .into_connection();

        let repository = PostgresPantryRepository::new(db.clone());
        repository
            .update_item(item)
            .await
            .expect("both rows update");

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statements = format!("{:?}", log[0]);
        assert!(statements.contains(r#"UPDATE "quantified_food_items""#));
        assert!(statements.contains(r#"UPDATE "pantry_items""#));
    }

    #[tokio::test]
    async fn delete_item_removes_both_rows_in_one_transaction() {
        let item = sample_item(Uuid::new_v4());
        let pantry_row = PantryModel {
            id: item.id,
            user_id: item.user_id,
            quantified_food_id: item.qfood.id,
            expiry: None,
            created_at: item.created_at.fixed_offset(),
            updated_at: item.updated_at.fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![pantry_row]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();

        let repository = PostgresPantryRepository::new(db.clone());
        repository.delete_item(item.id).await.expect("row goes");

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statements = format!("{:?}", log[0]);
        assert!(statements.contains(r#"DELETE FROM "pantry_items""#));
        assert!(statements.contains(r#"DELETE FROM "quantified_food_items""#));
    }
}
