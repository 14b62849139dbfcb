//! Link repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Link;
use crate::error::DomainError;

/// Persistence port for slug -> destination mappings. Slug uniqueness is a
/// storage-layer constraint; `create` surfaces a violation as `SlugTaken`
/// without leaving partial state behind.
#[async_trait]
pub trait LinkRepository: Send + Sync {
    async fn create(&self, link: &Link) -> Result<Link, DomainError>;
    /// Newest first by creation time, at most `limit` entries.
    async fn list_by_owner(&self, owner: &Uuid, limit: i64) -> Result<Vec<Link>, DomainError>;
    /// Public lookup used by the redirect path.
    async fn resolve(&self, slug: &str) -> Result<Option<String>, DomainError>;
}
