use crate::{
    domain::{
        food::entities::QuantifiedFood,
        shopping::entities::{ShoppingItem, ShoppingList},
    },
    entity::{shopping_items, shopping_lists},
};

impl From<&shopping_lists::Model> for ShoppingList {
    fn from(model: &shopping_lists::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<shopping_lists::Model> for ShoppingList {
    fn from(model: shopping_lists::Model) -> Self {
        Self::from(&model)
    }
}

pub fn map_shopping_item(model: &shopping_items::Model, qfood: QuantifiedFood) -> ShoppingItem {
    ShoppingItem {
        id: model.id,
        list_id: model.list_id,
        qfood,
    }
}
