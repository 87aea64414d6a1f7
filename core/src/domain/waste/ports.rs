use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    waste::entities::WastedFood,
};

#[cfg_attr(test, mockall::automock)]
pub trait WasteRepository: Send + Sync {
    fn get_wasted(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<WastedFood>, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
        waste_id: Uuid,
    ) -> impl Future<Output = Result<Option<WastedFood>, CoreError>> + Send;

    /// Deletes the pantry row and inserts the waste record in one
    /// transaction; the quantified row moves over untouched.
    fn move_from_pantry(
        &self,
        pantry_item_id: Uuid,
        record: WastedFood,
    ) -> impl Future<Output = Result<WastedFood, CoreError>> + Send;

    /// Deletes the record together with its quantified row.
    fn delete_wasted(&self, waste_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait WasteService: Send + Sync {
    fn get_wasted_food(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<WastedFood>, CoreError>> + Send;

    fn delete_wasted_food(
        &self,
        identity: Identity,
        waste_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
