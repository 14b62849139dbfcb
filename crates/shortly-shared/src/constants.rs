//! Application-wide constants

/// Name of the session cookie handed to browsers.
pub const SESSION_COOKIE: &str = "session";

/// Sessions live for 30 days from issuance.
pub const SESSION_TTL_DAYS: i64 = 30;

/// bcrypt work factor (~10 rounds, matching the adaptive-hash budget).
pub const BCRYPT_COST: u32 = 10;

/// Raw entropy of a session token before hex encoding (256 bits).
pub const SESSION_TOKEN_BYTES: usize = 32;

pub const MIN_PASSWORD_LENGTH: usize = 4;

pub const MIN_SLUG_LENGTH: usize = 3;
pub const MAX_SLUG_LENGTH: usize = 40;

/// Upper bound on links returned per listing call.
pub const MAX_LINKS_PER_PAGE: i64 = 200;
