use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Pokemon not found: {0}")]
    NotFound(String),

    #[error("Pokemon store lock was poisoned")]
    Poisoned,
}
