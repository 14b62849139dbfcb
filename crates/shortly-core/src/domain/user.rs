//! User domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. `name` is always stored normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Public projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

/// Canonical form of an account name: trimmed, lowercase.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_name(" Yash "), "yash");
        assert_eq!(normalize_name("yash"), "yash");
        assert_eq!(normalize_name("\tMiXeD Case\n"), "mixed case");
    }

    #[test]
    fn test_normalize_whitespace_only_is_empty() {
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_summary_drops_password_hash() {
        let user = User::new("yash".to_string(), "$2b$10$hash".to_string());
        let summary = UserSummary::from(&user);
        assert_eq!(summary.id, user.id);
        assert_eq!(summary.name, "yash");
    }
}
