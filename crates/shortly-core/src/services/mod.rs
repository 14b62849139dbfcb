//! Domain services

pub mod auth_service;
pub mod link_service;

pub use auth_service::{AuthService, LoginOutcome};
pub use link_service::LinkService;
