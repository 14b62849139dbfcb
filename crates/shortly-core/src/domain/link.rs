//! Link domain entity and slug/destination validation
//!
//! Slugs are 3-40 characters of ASCII letters, digits, hyphen, or underscore.
//! Destinations must be absolute http(s) URLs. Links are immutable once
//! created; there is no update or delete path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use shortly_shared::constants::{MAX_SLUG_LENGTH, MIN_SLUG_LENGTH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: Uuid,
    pub owner_user_id: Uuid,
    pub slug: String,
    pub destination_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    pub fn new(owner_user_id: Uuid, slug: String, destination_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_user_id,
            slug,
            destination_url,
            created_at: Utc::now(),
        }
    }
}

/// Return `true` when `value` is a well-formed slug.
pub fn is_valid_slug(value: &str) -> bool {
    (MIN_SLUG_LENGTH..=MAX_SLUG_LENGTH).contains(&value.len())
        && value.chars().all(is_allowed_slug_char)
}

fn is_allowed_slug_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

/// Return `true` when `value` parses as an absolute http or https URL.
pub fn is_valid_destination(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_too_short() {
        assert!(!is_valid_slug("ab"));
    }

    #[test]
    fn test_slug_with_allowed_chars() {
        assert!(is_valid_slug("a-b_9"));
        assert!(is_valid_slug("ABC"));
    }

    #[test]
    fn test_slug_too_long() {
        let slug = "a".repeat(41);
        assert!(!is_valid_slug(&slug));
        assert!(is_valid_slug(&slug[..40]));
    }

    #[test]
    fn test_slug_rejects_other_chars() {
        assert!(!is_valid_slug("a b c"));
        assert!(!is_valid_slug("a/b/c"));
        assert!(!is_valid_slug("héllo"));
    }

    #[test]
    fn test_destination_must_be_absolute_http() {
        assert!(is_valid_destination("https://example.com/path?q=1"));
        assert!(is_valid_destination("http://example.com"));
        assert!(!is_valid_destination("ftp://example.com"));
        assert!(!is_valid_destination("javascript:alert(1)"));
        assert!(!is_valid_destination("/relative/path"));
        assert!(!is_valid_destination("not a url"));
    }
}
