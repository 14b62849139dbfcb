// ============================================================================
// Shortly API - Redirect Handler
// File: crates/shortly-api/src/handlers/redirect.rs
// ============================================================================
//! Public slug redirect - GET /{slug}
//!
//! Unknown slugs redirect to the site root instead of an error page, so a
//! deleted or never-registered slug cannot strand visitors on an undefined
//! location.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};

use crate::response::error_response;
use crate::state::AppState;

pub async fn resolve_slug(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.links.resolve(&slug).await {
        Ok(Some(destination)) => Redirect::temporary(&destination).into_response(),
        Ok(None) => Redirect::temporary("/").into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}
