// ============================================================================
// Shortly Core - Authentication Service
// File: crates/shortly-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service: login-or-register, session issuance, session
//! teardown, and current-user resolution with lazy expiry.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use shortly_security::password::PasswordService;
use shortly_security::token::TokenService;
use shortly_shared::constants::MIN_PASSWORD_LENGTH;

use crate::domain::user::normalize_name;
use crate::domain::{Session, User, UserSummary};
use crate::error::DomainError;
use crate::repositories::{SessionRepository, UserRepository};

/// Result of a successful login-or-register call.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: UserSummary,
    /// `true` when this call created the account.
    pub created: bool,
}

pub struct AuthService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    session_ttl: Duration,
}

impl<U: UserRepository, S: SessionRepository> AuthService<U, S> {
    pub fn new(users: Arc<U>, sessions: Arc<S>, session_ttl_days: i64) -> Self {
        Self {
            users,
            sessions,
            session_ttl: Duration::days(session_ttl_days),
        }
    }

    /// Log in with a name and password, registering the account on first use.
    ///
    /// An unknown (normalized) name is auto-registered: a mistyped username
    /// silently creates a fresh account. That is documented product behavior,
    /// traded against user-enumeration resistance for zero-friction
    /// onboarding.
    pub async fn login_or_register(
        &self,
        name: &str,
        password: &str,
    ) -> Result<LoginOutcome, DomainError> {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return Err(DomainError::Validation("Name is required".to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation(
                "Password must be at least 4 characters".to_string(),
            ));
        }

        match self.users.find_by_name(&normalized).await? {
            None => {
                let password_hash = PasswordService::hash(password)
                    .map_err(|e| DomainError::PasswordHash(e.to_string()))?;
                let user = User::new(normalized.clone(), password_hash);
                // A concurrent first login with the same name may win the
                // unique-constraint race; the loser sees NameTaken.
                let created = self.users.create(&user).await?;

                info!("Registered new account: {}", normalized);
                Ok(LoginOutcome {
                    user: UserSummary::from(&created),
                    created: true,
                })
            }
            Some(existing) => {
                let password_valid = PasswordService::verify(password, &existing.password_hash)
                    .map_err(|_| DomainError::InvalidCredentials)?;
                if !password_valid {
                    warn!("Login failed: invalid password for: {}", normalized);
                    return Err(DomainError::InvalidCredentials);
                }

                info!("Login successful for: {}", normalized);
                Ok(LoginOutcome {
                    user: UserSummary::from(&existing),
                    created: false,
                })
            }
        }
    }

    /// Mint and persist a session for `user_id`. Every successful login gets
    /// its own session; concurrent sessions per user are allowed.
    pub async fn create_session(&self, user_id: Uuid) -> Result<Session, DomainError> {
        let token = TokenService::generate_session_token();
        let session = Session::new(token, user_id, self.session_ttl);
        self.sessions.insert(&session).await?;
        Ok(session)
    }

    /// Delete the presented session, if any. Absent or already-deleted tokens
    /// are not errors; the caller clears its cookie regardless.
    pub async fn destroy_session(&self, token: Option<&str>) -> Result<(), DomainError> {
        if let Some(token) = token {
            self.sessions.delete_by_token(token).await?;
        }
        Ok(())
    }

    /// Resolve the presented token to its owning user, or None for anonymous
    /// callers. An expired session is deleted on first read (lazy expiry) and
    /// treated exactly like a missing one.
    pub async fn current_user(
        &self,
        token: Option<&str>,
    ) -> Result<Option<UserSummary>, DomainError> {
        let Some(token) = token else {
            return Ok(None);
        };

        let Some(session) = self.sessions.find_by_token(token).await? else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) {
            self.sessions.delete_by_token(token).await?;
            return Ok(None);
        }

        let Some(user) = self.users.find_by_id(&session.user_id).await? else {
            return Ok(None);
        };

        Ok(Some(UserSummary::from(&user)))
    }
}
