//! # Shortly Infrastructure
//!
//! PostgreSQL repository implementations and the connection pool.

pub mod database;

pub use database::postgres::{PgLinkRepository, PgSessionRepository, PgUserRepository};
