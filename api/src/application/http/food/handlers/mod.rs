pub mod lookup_barcode;
pub mod register_barcode;
pub mod search_foods;
