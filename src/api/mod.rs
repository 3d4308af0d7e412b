pub mod config;
pub mod pokemon_apis;
