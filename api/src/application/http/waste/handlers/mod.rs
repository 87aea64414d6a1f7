pub mod delete_wasted_food;
pub mod get_wasted_food;
