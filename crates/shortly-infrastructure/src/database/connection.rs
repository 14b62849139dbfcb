//! Database connection pool
//!
//! Built once at startup and injected into the repositories; teardown is
//! bound to process exit. The short acquire timeout keeps a saturated pool
//! from hanging requests; callers see it as an unavailability error.

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn create_pool(
    url: &str,
    max_connections: u32,
    min_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(min_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(url)
        .await
}
