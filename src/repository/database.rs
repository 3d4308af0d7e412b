use super::error::RepositoryError;
use crate::models::pokemon::Pokemon;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-process record store shared by every worker through `web::Data`.
///
/// Records are kept in insertion order, which is the order the changelist
/// shows them in.
#[derive(Debug, Default)]
pub struct Database {
    pokemons: RwLock<Vec<Pokemon>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Pokemon>>, RepositoryError> {
        self.pokemons.read().map_err(|_| RepositoryError::Poisoned)
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Pokemon>>, RepositoryError> {
        self.pokemons.write().map_err(|_| RepositoryError::Poisoned)
    }
}
