//! # Shortly Shared
//!
//! Configuration, telemetry, and constants shared across the workspace.

pub mod config;
pub mod constants;
pub mod telemetry;

pub use config::AppConfig;
