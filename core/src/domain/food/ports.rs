use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{Barcode, FoodItem, QuantifiedFood},
        value_objects::{NewQuantifiedFood, RegisterBarcodeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    fn get_food_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<FoodItem>, CoreError>> + Send;

    fn create_food(
        &self,
        food: FoodItem,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn search_foods(
        &self,
        query: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn create_quantified(
        &self,
        qfood: QuantifiedFood,
    ) -> impl Future<Output = Result<QuantifiedFood, CoreError>> + Send;

    fn update_quantified(
        &self,
        qfood: QuantifiedFood,
    ) -> impl Future<Output = Result<QuantifiedFood, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait BarcodeRepository: Send + Sync {
    fn get_by_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Option<Barcode>, CoreError>> + Send;

    fn create_barcode(
        &self,
        barcode: Barcode,
    ) -> impl Future<Output = Result<Barcode, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait FoodService: Send + Sync {
    /// Reuses the catalogue row whose trimmed name matches exactly, or
    /// creates one, then persists a fresh quantified row for the use-site.
    fn resolve_quantified_food(
        &self,
        input: NewQuantifiedFood,
    ) -> impl Future<Output = Result<QuantifiedFood, CoreError>> + Send;

    fn search_food_items(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn register_barcode(
        &self,
        input: RegisterBarcodeInput,
    ) -> impl Future<Output = Result<Barcode, CoreError>> + Send;

    fn lookup_barcode(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Barcode, CoreError>> + Send;
}
