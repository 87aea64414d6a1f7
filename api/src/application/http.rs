pub mod authentication;
pub mod food;
pub mod health;
pub mod pantry;
pub mod query_params;
pub mod recipe;
pub mod server;
pub mod shopping;
pub mod waste;
