pub mod auth_session_repository;
