// ============================================================================
// Shortly Infrastructure - PostgreSQL User Repository
// File: crates/shortly-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use shortly_core::domain::User;
use shortly_core::error::DomainError;
use shortly_core::repositories::UserRepository;

use super::map_db_err;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_err("finding user by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError> {
        // Names are normalized (trimmed, lowercased) before they reach
        // storage, so plain equality is the right comparison.
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, password_hash, created_at
            FROM users
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_err("finding user by name", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (id, name, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, password_hash, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // UNIQUE(name) closes the check-then-insert race between
            // concurrent first logins.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::NameTaken(user.name.clone())
            }
            _ => map_db_err("creating user", e),
        })?;

        info!("User created: {}", row.id);
        Ok(row.into())
    }
}
