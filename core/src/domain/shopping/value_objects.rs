use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::shopping::entities::{ShoppingItem, ShoppingList};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ShoppingListDetails {
    pub list: ShoppingList,
    pub items: Vec<ShoppingItem>,
}
