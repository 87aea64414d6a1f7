use crate::{
    domain::food::entities::{Barcode, FoodItem, QuantifiedFood},
    entity::{barcodes, food_items, quantified_food_items},
};

impl From<&food_items::Model> for FoodItem {
    fn from(model: &food_items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<food_items::Model> for FoodItem {
    fn from(model: food_items::Model) -> Self {
        Self::from(&model)
    }
}

/// Joins a quantified row with its catalogue name.
pub fn map_quantified(model: &quantified_food_items::Model, food_name: &str) -> QuantifiedFood {
    QuantifiedFood {
        id: model.id,
        food_id: model.food_id,
        name: food_name.to_string(),
        quantity: model.quantity,
        unit: model.unit.clone(),
    }
}

pub fn map_barcode(model: &barcodes::Model, qfood: QuantifiedFood) -> Barcode {
    Barcode {
        id: model.id,
        barcode: model.barcode.clone(),
        qfood,
        created_at: model.created_at.to_utc(),
    }
}
