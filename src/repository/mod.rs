pub mod database;
pub mod error;
pub mod pokemon_repository;
