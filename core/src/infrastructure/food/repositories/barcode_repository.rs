use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food::{entities::Barcode, ports::BarcodeRepository},
    },
    entity::barcodes::{ActiveModel, Column, Entity},
    infrastructure::food::{mappers::map_barcode, repositories::food_repository::load_quantified_one},
};

#[derive(Debug, Clone)]
pub struct PostgresBarcodeRepository {
    pub db: DatabaseConnection,
}

impl PostgresBarcodeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BarcodeRepository for PostgresBarcodeRepository {
    async fn get_by_barcode(&self, barcode: String) -> Result<Option<Barcode>, CoreError> {
        let model = Entity::find()
            .filter(Column::Barcode.eq(barcode))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get barcode: {}", e);
                CoreError::InternalServerError
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        let qfood = load_quantified_one(&self.db, model.quantified_food_id).await?;

        Ok(Some(map_barcode(&model, qfood)))
    }

    async fn create_barcode(&self, barcode: Barcode) -> Result<Barcode, CoreError> {
        let active_model = ActiveModel {
            id: Set(barcode.id),
            barcode: Set(barcode.barcode.clone()),
            quantified_food_id: Set(barcode.qfood.id),
            created_at: Set(barcode.created_at.fixed_offset()),
        };

        Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create barcode: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(barcode)
    }
}
