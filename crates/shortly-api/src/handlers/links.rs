// ============================================================================
// Shortly API - Link Handlers
// File: crates/shortly-api/src/handlers/links.rs
// ============================================================================
//! Link management handlers (create, list). Both require a live session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shortly_core::domain::{Link, UserSummary};
use shortly_core::error::DomainError;

use crate::response::{error_response, ApiResponse};
use crate::session_cookie::presented_token;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub url: String,
    pub short_slug: String,
}

#[derive(Debug, Serialize)]
pub struct LinkDto {
    pub id: String,
    pub url: String,
    pub short_slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Link> for LinkDto {
    fn from(link: &Link) -> Self {
        Self {
            id: link.id.to_string(),
            url: link.destination_url.clone(),
            short_slug: link.slug.clone(),
            created_at: link.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinksData {
    pub links: Vec<LinkDto>,
}

async fn require_user(
    state: &AppState,
    jar: &CookieJar,
) -> Result<UserSummary, (StatusCode, Json<ApiResponse<()>>)> {
    let token = presented_token(jar);
    state
        .auth
        .current_user(token.as_deref())
        .await
        .map_err(|e| error_response(&e))?
        .ok_or_else(|| error_response(&DomainError::Unauthorized))
}

/// Create-link handler - POST /api/v1/links
pub async fn create_link(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LinkDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    let user = require_user(&state, &jar).await?;

    if payload.url.is_empty() || payload.short_slug.is_empty() {
        return Err(error_response(&DomainError::Validation(
            "Missing url or short_slug".to_string(),
        )));
    }

    let link = state
        .links
        .create_link(user.id, &payload.short_slug, &payload.url)
        .await
        .map_err(|e| error_response(&e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(LinkDto::from(&link))),
    ))
}

/// List-links handler - GET /api/v1/links
pub async fn list_links(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ApiResponse<LinksData>>, (StatusCode, Json<ApiResponse<()>>)> {
    let user = require_user(&state, &jar).await?;

    let links = state
        .links
        .list_links(user.id)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(ApiResponse::success(LinksData {
        links: links.iter().map(LinkDto::from).collect(),
    })))
}
