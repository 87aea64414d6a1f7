use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pantry::entities::PantryItem,
        shopping::{
            entities::{ShoppingItem, ShoppingList},
            ports::ShoppingRepository,
        },
    },
    entity::{
        pantry_items::ActiveModel as PantryActiveModel,
        quantified_food_items::{Column as QuantifiedColumn, Entity as QuantifiedEntity},
        shopping_items::{
            ActiveModel as ItemActiveModel, Column as ItemColumn, Entity as ItemEntity,
        },
        shopping_lists::{ActiveModel, Column, Entity},
    },
    infrastructure::{
        food::repositories::food_repository::load_quantified,
        shopping::mappers::map_shopping_item,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresShoppingRepository {
    pub db: DatabaseConnection,
}

impl PostgresShoppingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn item_active_model(item: &ShoppingItem) -> ItemActiveModel {
    ItemActiveModel {
        id: Set(item.id),
        list_id: Set(item.list_id),
        quantified_food_id: Set(item.qfood.id),
    }
}

impl ShoppingRepository for PostgresShoppingRepository {
    async fn get_lists(&self, user_id: Uuid) -> Result<Vec<ShoppingList>, CoreError> {
        let lists = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping lists: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(lists.iter().map(ShoppingList::from).collect())
    }

    async fn get_list(&self, list_id: Uuid) -> Result<Option<ShoppingList>, CoreError> {
        let list = Entity::find_by_id(list_id).one(&self.db).await.map_err(|e| {
            error!("Failed to get shopping list: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(list.map(ShoppingList::from))
    }

    async fn get_items(&self, list_id: Uuid) -> Result<Vec<ShoppingItem>, CoreError> {
        let rows = ItemEntity::find()
            .filter(ItemColumn::ListId.eq(list_id))
            .order_by_asc(ItemColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping items: {}", e);
                CoreError::InternalServerError
            })?;

        let qfood_ids: Vec<Uuid> = rows.iter().map(|r| r.quantified_food_id).collect();
        let mut qfoods = load_quantified(&self.db, qfood_ids).await?;

        Ok(rows
            .iter()
            .filter_map(|row| {
                qfoods
                    .remove(&row.quantified_food_id)
                    .map(|qfood| map_shopping_item(row, qfood))
            })
            .collect())
    }

    async fn create_list(
        &self,
        list: ShoppingList,
        items: Vec<ShoppingItem>,
    ) -> Result<ShoppingList, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let created = Entity::insert(ActiveModel {
            id: Set(list.id),
            user_id: Set(list.user_id),
            name: Set(list.name.clone()),
            created_at: Set(list.created_at.fixed_offset()),
        })
        .exec_with_returning(&txn)
        .await
        .map_err(|e| {
            error!("Failed to create shopping list: {}", e);
            CoreError::InternalServerError
        })?;

        if !items.is_empty() {
            let models: Vec<ItemActiveModel> = items.iter().map(item_active_model).collect();

            ItemEntity::insert_many(models).exec(&txn).await.map_err(|e| {
                error!("Failed to create shopping items: {}", e);
                CoreError::InternalServerError
            })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(ShoppingList::from(created))
    }

    async fn add_item(&self, item: ShoppingItem) -> Result<ShoppingItem, CoreError> {
        ItemEntity::insert(item_active_model(&item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create shopping item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(item)
    }

    async fn remove_item(&self, item_id: Uuid) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let row = ItemEntity::find_by_id(item_id).one(&txn).await.map_err(|e| {
            error!("Failed to get shopping item: {}", e);
            CoreError::InternalServerError
        })?;

        let Some(row) = row else {
            return Ok(());
        };

        ItemEntity::delete_many()
            .filter(ItemColumn::Id.eq(item_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping item: {}", e);
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

    async fn delete_list(&self, list_id: Uuid) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let rows = ItemEntity::find()
            .filter(ItemColumn::ListId.eq(list_id))
            .all(&txn)
            .await
            .map_err(|e| {
                error!("Failed to get shopping items: {}", e);
                CoreError::InternalServerError
            })?;

        ItemEntity::delete_many()
            .filter(ItemColumn::ListId.eq(list_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping items: {}", e);
                CoreError::InternalServerError
            })?;

        let qfood_ids: Vec<Uuid> = rows.iter().map(|r| r.quantified_food_id).collect();
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
            .filter(Column::Id.eq(list_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit transaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }

    async fn complete_list(
        &self,
        list_id: Uuid,
        pantry_items: Vec<PantryItem>,
    ) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InternalServerError
        })?;

        // The quantified rows change owners here: the shopping item rows go,
        // the new pantry rows point at the same quantified ids.
        if !pantry_items.is_empty() {
            let models: Vec<PantryActiveModel> = pantry_items
                .iter()
                .map(|item| PantryActiveModel {
                    id: Set(item.id),
                    user_id: Set(item.user_id),
                    quantified_food_id: Set(item.qfood.id),
                    expiry: Set(item.expiry.clone()),
                    created_at: Set(item.created_at.fixed_offset()),
                    updated_at: Set(item.updated_at.fixed_offset()),
                })
                .collect();

            crate::entity::pantry_items::Entity::insert_many(models)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create pantry items: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        ItemEntity::delete_many()
            .filter(ItemColumn::ListId.eq(list_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping items: {}", e);
                CoreError::InternalServerError
            })?;

        Entity::delete_many()
            .filter(Column::Id.eq(list_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to delete shopping list: {}", e);
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
    use crate::entity::shopping_items::Model as ItemModel;

    #[tokio::test]
    async fn remove_item_drops_both_rows_in_one_transaction() {
        let item_id = Uuid::new_v4();
        let row = ItemModel {
            id: item_id,
            list_id: Uuid::new_v4(),
            quantified_food_id: Uuid::new_v4(),
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

        let repository = PostgresShoppingRepository::new(db.clone());
        repository.remove_item(item_id).await.expect("item goes");

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statements = format!("{:?}", log[0]);
        assert!(statements.contains(r#"DELETE FROM "shopping_items""#));
        assert!(statements.contains(r#"DELETE FROM "quantified_food_items""#));
    }
}
