use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    food::value_objects::NewQuantifiedFood,
    pantry::entities::PantryItem,
    shopping::{
        entities::{ShoppingItem, ShoppingList},
        value_objects::ShoppingListDetails,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingRepository: Send + Sync {
    fn get_lists(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    fn get_list(
        &self,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingList>, CoreError>> + Send;

    fn get_items(
        &self,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ShoppingItem>, CoreError>> + Send;

    /// Inserts the list and any initial items in one transaction.
    fn create_list(
        &self,
        list: ShoppingList,
        items: Vec<ShoppingItem>,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn add_item(
        &self,
        item: ShoppingItem,
    ) -> impl Future<Output = Result<ShoppingItem, CoreError>> + Send;

    /// Deletes the item together with its quantified row.
    fn remove_item(&self, item_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Deletes the list, its items and their quantified rows.
    fn delete_list(&self, list_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Converts a completed list: inserts the given pantry rows (which reuse
    /// the items' quantified rows), then drops the items and the list, all
    /// in one transaction.
    fn complete_list(
        &self,
        list_id: Uuid,
        pantry_items: Vec<PantryItem>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ShoppingPolicy: Send + Sync {
    fn can_access_list(
        &self,
        identity: &Identity,
        list: &ShoppingList,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingService: Send + Sync {
    fn get_shopping_lists(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    fn create_shopping_list(
        &self,
        identity: Identity,
        name: String,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn get_shopping_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<ShoppingListDetails, CoreError>> + Send;

    fn delete_shopping_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn add_shopping_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        input: NewQuantifiedFood,
    ) -> impl Future<Output = Result<ShoppingItem, CoreError>> + Send;

    fn remove_shopping_item(
        &self,
        identity: Identity,
        list_id: Uuid,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Builds the delta list for a recipe: everything the pantry does not
    /// already cover, named after the recipe.
    fn create_list_from_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<ShoppingListDetails, CoreError>> + Send;

    /// Marks the list bought: its items become pantry rows with suggested
    /// expiry dates and the list disappears.
    fn complete_shopping_list(
        &self,
        identity: Identity,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;
}
