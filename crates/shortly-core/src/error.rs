//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid name or password")]
    InvalidCredentials,

    #[error("Name already exists: {0}")]
    NameTaken(String),

    #[error("Short link already exists: {0}")]
    SlugTaken(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Password hash error: {0}")]
    PasswordHash(String),
}
