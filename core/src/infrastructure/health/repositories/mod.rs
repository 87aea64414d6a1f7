pub mod health_repository;
