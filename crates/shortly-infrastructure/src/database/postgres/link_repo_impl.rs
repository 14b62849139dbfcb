// ============================================================================
// Shortly Infrastructure - PostgreSQL Link Repository
// File: crates/shortly-infrastructure/src/database/postgres/link_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use shortly_core::domain::Link;
use shortly_core::error::DomainError;
use shortly_core::repositories::LinkRepository;

use super::map_db_err;

pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LinkRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub short_url: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            owner_user_id: row.user_id,
            slug: row.short_url,
            destination_url: row.url,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, link: &Link) -> Result<Link, DomainError> {
        let row: LinkRow = sqlx::query_as(
            r#"
            INSERT INTO urls (id, user_id, short_url, url, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, short_url, url, created_at
            "#,
        )
        .bind(link.id)
        .bind(link.owner_user_id)
        .bind(&link.slug)
        .bind(&link.destination_url)
        .bind(link.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // UNIQUE(short_url): of two racing creates for the same slug,
            // exactly one wins and the loser leaves no row behind.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::SlugTaken(link.slug.clone())
            }
            _ => map_db_err("creating link", e),
        })?;

        info!("Link created: {} ({})", row.short_url, row.id);
        Ok(row.into())
    }

    async fn list_by_owner(&self, owner: &Uuid, limit: i64) -> Result<Vec<Link>, DomainError> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, short_url, url, created_at
            FROM urls
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(owner)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_err("listing links by owner", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn resolve(&self, slug: &str) -> Result<Option<String>, DomainError> {
        let destination: Option<String> = sqlx::query_scalar(
            r#"
            SELECT url
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_err("resolving slug", e))?;

        Ok(destination)
    }
}
