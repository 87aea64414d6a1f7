pub mod add_pantry_item;
pub mod add_pantry_item_by_barcode;
pub mod delete_pantry_item;
pub mod discard_pantry_item;
pub mod get_pantry;
pub mod get_pantry_summary;
pub mod update_pantry_item;
