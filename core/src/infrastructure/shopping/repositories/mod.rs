pub mod shopping_repository;
