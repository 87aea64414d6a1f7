pub mod complete_recipe;
pub mod create_recipe;
pub mod delete_recipe;
pub mod get_in_use_recipes;
pub mod get_recipe;
pub mod get_recipes;
pub mod rate_recipe;
pub mod update_recipe;
pub mod use_recipe;
