pub use super::auth_sessions::Entity as AuthSessions;
pub use super::barcodes::Entity as Barcodes;
pub use super::credentials::Entity as Credentials;
pub use super::food_items::Entity as FoodItems;
pub use super::in_use_recipes::Entity as InUseRecipes;
pub use super::ingredients::Entity as Ingredients;
pub use super::pantry_items::Entity as PantryItems;
pub use super::quantified_food_items::Entity as QuantifiedFoodItems;
pub use super::ratings::Entity as Ratings;
pub use super::recipes::Entity as Recipes;
pub use super::shopping_items::Entity as ShoppingItems;
pub use super::shopping_lists::Entity as ShoppingLists;
pub use super::users::Entity as Users;
pub use super::wasted_food::Entity as WastedFood;
