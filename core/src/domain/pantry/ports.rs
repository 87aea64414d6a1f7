use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    pantry::{
        entities::PantryItem,
        value_objects::{AddPantryItemInput, PantrySummaryEntry, UpdatePantryItemInput},
    },
    waste::entities::WastedFood,
};

#[cfg_attr(test, mockall::automock)]
pub trait PantryRepository: Send + Sync {
    fn get_items(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;

    fn get_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<PantryItem>, CoreError>> + Send;

    fn create_item(
        &self,
        item: PantryItem,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    /// Persists both halves of the item: the pantry row (expiry, timestamps)
    /// and its quantified row (quantity, unit).
    fn update_item(
        &self,
        item: PantryItem,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    /// Removes the pantry row together with its quantified row.
    fn delete_item(&self, item_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PantryService: Send + Sync {
    fn get_pantry(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;

    fn get_pantry_summary(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<PantrySummaryEntry>, CoreError>> + Send;

    fn add_pantry_item(
        &self,
        identity: Identity,
        input: AddPantryItemInput,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    fn add_pantry_item_by_barcode(
        &self,
        identity: Identity,
        barcode: String,
        expiry: Option<String>,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    fn update_pantry_item(
        &self,
        identity: Identity,
        item_id: Uuid,
        input: UpdatePantryItemInput,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    fn remove_pantry_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Moves a pantry row into the waste log instead of silently deleting it.
    fn discard_pantry_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<WastedFood, CoreError>> + Send;
}
