use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        waste::{entities::WastedFood, ports::WasteRepository},
    },
    entity::{
        pantry_items::{Column as PantryColumn, Entity as PantryEntity},
        quantified_food_items::{Column as QuantifiedColumn, Entity as QuantifiedEntity},
        wasted_food::{ActiveModel, Column, Entity},
    },
    infrastructure::{
        food::repositories::food_repository::{load_quantified, load_quantified_one},
        waste::mappers::map_wasted,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresWasteRepository {
    pub db: DatabaseConnection,
}

impl PostgresWasteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl WasteRepository for PostgresWasteRepository {
    async fn get_wasted(&self, user_id: Uuid) -> Result<Vec<WastedFood>, CoreError> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::RecordedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get wasted food: {}", e);
                CoreError::InternalServerError
            })?;

        let qfood_ids: Vec<Uuid> = rows.iter().map(|r| r.quantified_food_id).collect();
        let mut qfoods = load_quantified(&self.db, qfood_ids).await?;

        Ok(rows
            .iter()
            .filter_map(|row| {
                qfoods
                    .remove(&row.quantified_food_id)
                    .map(|qfood| map_wasted(row, qfood))
            })
            .collect())
    }

    async fn get_by_id(&self, user_id: Uuid, waste_id: Uuid) -> Result<Option<WastedFood>, CoreError> {
        let row = Entity::find()
            .filter(Column::Id.eq(waste_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get wasted food: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let qfood = load_quantified_one(&self.db, row.quantified_food_id).await?;

        Ok(Some(map_wasted(&row, qfood)))
    }

    async fn move_from_pantry(
        &self,
        pantry_item_id: Uuid,
        record: WastedFood,
    ) -> Result<WastedFood, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        // The quantified row stays put; only its owner changes.
        PantryEntity::delete_many()
            .filter(PantryColumn::Id.eq(pantry_item_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete pantry item: {}", e);
                CoreError::InternalServerError
            })?;

        Entity::insert(ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            quantified_food_id: Set(record.qfood.id),
            expired: Set(record.expired.clone()),
            recorded_at: Set(record.recorded_at.fixed_offset()),
        })
        .exec_with_returning(&txn)
        .await
        .map_err(|e| {
            error!("Failed to create waste record: {}", e);
            CoreError::InternalServerError
        })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(record)
    }

    async fn delete_wasted(&self, waste_id: Uuid) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let row = Entity::find_by_id(waste_id).one(&txn).await.map_err(|e| {
            error!("Failed to get wasted food: {}", e);
            CoreError::InternalServerError
        })?;

        let Some(row) = row else {
            return Ok(());
        };

        Entity::delete_many()
            .filter(Column::Id.eq(waste_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete waste record: {}", e);
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
    use crate::{domain::common::generate_timestamp, entity::wasted_food::Model as WastedModel};

    #[tokio::test]
    async fn delete_wasted_drops_both_rows_in_one_transaction() {
        let waste_id = Uuid::new_v4();
        let (now, _) = generate_timestamp();
        let row = WastedModel {
            id: waste_id,
            user_id: Uuid::new_v4(),
            quantified_food_id: Uuid::new_v4(),
            expired: None,
            recorded_at: now.fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
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

        let repository = PostgresWasteRepository::new(db.clone());
        repository.delete_wasted(waste_id).await.expect("record goes");

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statements = format!("{:?}", log[0]);
        assert!(statements.contains(r#"DELETE FROM "wasted_food""#));
        assert!(statements.contains(r#"DELETE FROM "quantified_food_items""#));
    }
}
