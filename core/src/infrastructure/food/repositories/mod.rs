pub mod barcode_repository;
pub mod food_repository;
