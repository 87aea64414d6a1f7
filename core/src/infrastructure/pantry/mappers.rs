use crate::{
    domain::{food::entities::QuantifiedFood, pantry::entities::PantryItem},
    entity::pantry_items,
};

pub fn map_item(model: &pantry_items::Model, qfood: QuantifiedFood) -> PantryItem {
    PantryItem {
        id: model.id,
        user_id: model.user_id,
        qfood,
        expiry: model.expiry.clone(),
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    }
}
