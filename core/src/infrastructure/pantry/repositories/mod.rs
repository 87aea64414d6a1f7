pub mod pantry_repository;
