pub mod add_shopping_item;
pub mod complete_shopping_list;
pub mod create_list_from_recipe;
pub mod create_shopping_list;
pub mod delete_shopping_list;
pub mod get_shopping_list;
pub mod get_shopping_lists;
pub mod remove_shopping_item;
