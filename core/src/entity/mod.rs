pub mod prelude;

pub mod auth_sessions;
pub mod barcodes;
pub mod credentials;
pub mod food_items;
pub mod in_use_recipes;
pub mod ingredients;
pub mod pantry_items;
pub mod quantified_food_items;
pub mod ratings;
pub mod recipes;
pub mod shopping_items;
pub mod shopping_lists;
pub mod users;
pub mod wasted_food;
