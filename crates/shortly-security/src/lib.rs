//! # Shortly Security
//!
//! Password hashing and session-token generation.

pub mod password;
pub mod token;

pub use password::{PasswordError, PasswordService};
