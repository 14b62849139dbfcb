// ============================================================================
// Shortly Infrastructure - PostgreSQL Session Repository
// File: crates/shortly-infrastructure/src/database/postgres/session_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shortly_core::domain::Session;
use shortly_core::error::DomainError;
use shortly_core::repositories::SessionRepository;

use super::map_db_err;

pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SessionRow {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            token: row.token,
            user_id: row.user_id,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn insert(&self, session: &Session) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (token, user_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&session.token)
        .bind(session.user_id)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_err("inserting session", e))?;

        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT token, user_id, created_at, expires_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_err("finding session by token", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete_by_token(&self, token: &str) -> Result<(), DomainError> {
        // Zero rows affected is fine: lazy expiry and logout may race and
        // both try to delete the same token.
        sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_err("deleting session", e))?;

        Ok(())
    }
}
