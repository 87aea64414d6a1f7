use std::collections::HashMap;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
    prelude::Expr,
    sea_query::extension::postgres::PgExpr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food::{
            entities::{FoodItem, QuantifiedFood},
            ports::FoodRepository,
        },
    },
    entity::{
        food_items::{ActiveModel, Column, Entity},
        quantified_food_items::{
            ActiveModel as QuantifiedActiveModel, Column as QuantifiedColumn,
            Entity as QuantifiedEntity,
        },
    },
    infrastructure::food::mappers::map_quantified,
};

/// Loads quantified rows by id and joins each with its catalogue name.
/// Shared by every repository that embeds a `QuantifiedFood`.
pub(crate) async fn load_quantified<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, QuantifiedFood>, CoreError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let quantified = QuantifiedEntity::find()
        .filter(QuantifiedColumn::Id.is_in(ids))
        .all(conn)
        .await
        .map_err(|e| {
            error!("Failed to load quantified food: {}", e);
            CoreError::InternalServerError
        })?;

    let food_ids: Vec<Uuid> = quantified.iter().map(|q| q.food_id).collect();
    let foods = Entity::find()
        .filter(Column::Id.is_in(food_ids))
        .all(conn)
        .await
        .map_err(|e| {
            error!("Failed to load food items: {}", e);
            CoreError::InternalServerError
        })?;

    let names: HashMap<Uuid, String> = foods.into_iter().map(|f| (f.id, f.name)).collect();

    Ok(quantified
        .iter()
        .map(|model| {
            let name = names
                .get(&model.food_id)
                .map(String::as_str)
                .unwrap_or_default();
            (model.id, map_quantified(model, name))
        })
        .collect())
}

pub(crate) async fn load_quantified_one<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<QuantifiedFood, CoreError> {
    let mut map = load_quantified(conn, vec![id]).await?;

    map.remove(&id).ok_or_else(|| {
        error!("Quantified food {} has no row", id);
        CoreError::InternalServerError
    })
}

#[derive(Debug, Clone)]
pub struct PostgresFoodRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FoodRepository for PostgresFoodRepository {
    async fn get_food_by_name(&self, name: String) -> Result<Option<FoodItem>, CoreError> {
        let food = Entity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(food.map(FoodItem::from))
    }

    async fn create_food(&self, food: FoodItem) -> Result<FoodItem, CoreError> {
        let active_model = ActiveModel {
            id: Set(food.id),
            name: Set(food.name.clone()),
            created_at: Set(food.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create food item: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FoodItem::from(created))
    }

    async fn search_foods(&self, query: String, limit: u64) -> Result<Vec<FoodItem>, CoreError> {
        let foods = Entity::find()
            .filter(Expr::col(Column::Name).ilike(format!("%{}%", query)))
            .order_by_asc(Column::Name)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search food items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(foods.iter().map(FoodItem::from).collect())
    }

    async fn create_quantified(&self, qfood: QuantifiedFood) -> Result<QuantifiedFood, CoreError> {
        let active_model = QuantifiedActiveModel {
            id: Set(qfood.id),
            food_id: Set(qfood.food_id),
            quantity: Set(qfood.quantity),
            unit: Set(qfood.unit.clone()),
        };

        QuantifiedEntity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create quantified food: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(qfood)
    }

    async fn update_quantified(&self, qfood: QuantifiedFood) -> Result<QuantifiedFood, CoreError> {
        let active_model = QuantifiedActiveModel {
            id: Set(qfood.id),
            food_id: Set(qfood.food_id),
            quantity: Set(qfood.quantity),
            unit: Set(qfood.unit.clone()),
        };

        QuantifiedEntity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update quantified food: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(qfood)
    }
}
