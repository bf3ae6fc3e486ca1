use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Could not determine the city from the provided coordinates")]
    UnresolvableLocation,

    #[error("User not found")]
    NotFound,

    // The user row is already committed when this fires; callers must not
    // report it as a failed registration.
    #[error("Token signing failed: {0}")]
    Signing(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
