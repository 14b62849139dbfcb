//! Session repository trait (port)

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::DomainError;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: &Session) -> Result<(), DomainError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError>;
    /// Idempotent: deleting an absent token is not an error.
    async fn delete_by_token(&self, token: &str) -> Result<(), DomainError>;
}
