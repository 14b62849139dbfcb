//! Health check handler

use axum::Json;
use serde::Serialize;

use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
}

/// Liveness probe - GET /health
pub async fn health_check() -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::success(HealthData { status: "ok" }))
}
