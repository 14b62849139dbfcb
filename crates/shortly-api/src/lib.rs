//! # Shortly API
//!
//! HTTP handlers, DTOs, the response envelope, and session-cookie helpers.

pub mod handlers;
pub mod response;
pub mod session_cookie;
pub mod state;
