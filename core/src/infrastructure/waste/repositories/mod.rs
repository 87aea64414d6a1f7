pub mod waste_repository;
