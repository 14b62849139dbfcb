// ============================================================================
// Shortly API - Auth Handlers
// File: crates/shortly-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (login-or-register, logout, current user)

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::response::{error_response, ApiResponse};
use crate::session_cookie::{clear_session_cookie, presented_token, session_cookie};
use crate::state::AppState;

/// Login request payload. Unknown names register on the fly.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// User DTO for responses
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginData {
    pub created: bool,
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct MeData {
    pub authenticated: bool,
    pub user: Option<UserDto>,
}

/// Login handler - POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginData>>), (StatusCode, Json<ApiResponse<()>>)> {
    let outcome = state
        .auth
        .login_or_register(&payload.name, &payload.password)
        .await
        .map_err(|e| error_response(&e))?;

    let session = state
        .auth
        .create_session(outcome.user.id)
        .await
        .map_err(|e| error_response(&e))?;

    let jar = jar.add(session_cookie(
        session.token,
        state.config.session.ttl_days,
        state.config.session.cookie_secure,
    ));

    let message = if outcome.created {
        "Account created & logged in."
    } else {
        "Logged in."
    };

    Ok((
        jar,
        Json(ApiResponse::success_with_message(
            LoginData {
                created: outcome.created,
                user: UserDto {
                    name: outcome.user.name,
                },
            },
            message,
        )),
    ))
}

/// Logout handler - POST /api/v1/auth/logout
///
/// The client cookie is cleared unconditionally; a stale or absent token is
/// not a reason to leave the credential behind.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<()>>) {
    let token = presented_token(&jar);
    if let Err(e) = state.auth.destroy_session(token.as_deref()).await {
        warn!("Session delete failed during logout: {}", e);
    }

    let jar = jar.add(clear_session_cookie(state.config.session.cookie_secure));
    (
        jar,
        Json(ApiResponse::success_with_message((), "Logged out successfully")),
    )
}

/// Current-user handler - GET /api/v1/me
///
/// Anonymous callers get `authenticated: false`, never an error.
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ApiResponse<MeData>>, (StatusCode, Json<ApiResponse<()>>)> {
    let token = presented_token(&jar);
    let user = state
        .auth
        .current_user(token.as_deref())
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(ApiResponse::success(MeData {
        authenticated: user.is_some(),
        user: user.map(|u| UserDto { name: u.name }),
    })))
}
