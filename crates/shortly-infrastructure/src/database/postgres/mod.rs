pub mod link_repo_impl;
pub mod session_repo_impl;
pub mod user_repo_impl;

pub use link_repo_impl::PgLinkRepository;
pub use session_repo_impl::PgSessionRepository;
pub use user_repo_impl::PgUserRepository;

use shortly_core::error::DomainError;
use tracing::error;

/// Map a sqlx error onto the domain taxonomy. Pool exhaustion and transport
/// failures become `Unavailable` so callers report a generic outage instead
/// of hanging or leaking driver details.
pub(crate) fn map_db_err(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            DomainError::Unavailable(e.to_string())
        }
        other => DomainError::Database(other.to_string()),
    }
}
