pub mod authentication;
pub mod common;
pub mod credential;
pub mod crypto;
pub mod food;
pub mod health;
pub mod pantry;
pub mod recipe;
pub mod shopping;
pub mod user;
pub mod waste;
