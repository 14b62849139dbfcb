//! User repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::User;
use crate::error::DomainError;

/// Persistence port for user records. `create` must rely on a storage-layer
/// uniqueness constraint on the normalized name so that concurrent inserts of
/// the same name cannot both succeed.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError>;
    async fn create(&self, user: &User) -> Result<User, DomainError>;
}
