//! Session domain entity

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A server-side session keyed by its opaque bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, user_id: Uuid, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token,
            user_id,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// A session is valid only while `expires_at` lies in the future.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_not_expired() {
        let session = Session::new("tok".into(), Uuid::new_v4(), Duration::days(30));
        assert!(!session.is_expired(Utc::now()));
    }

    #[test]
    fn test_session_expires_after_ttl() {
        let session = Session::new("tok".into(), Uuid::new_v4(), Duration::days(30));
        let later = Utc::now() + Duration::days(31);
        assert!(session.is_expired(later));
    }

    #[test]
    fn test_expiry_boundary_counts_as_expired() {
        let session = Session::new("tok".into(), Uuid::new_v4(), Duration::days(30));
        assert!(session.is_expired(session.expires_at));
    }
}
