//! Domain entities

pub mod link;
pub mod session;
pub mod user;

pub use link::Link;
pub use session::Session;
pub use user::{User, UserSummary};
