//! Health Handler
//!
//! 存活检查，不探测上游

use axum::Json;

use crate::infrastructure::http::dto::HealthResponse;

/// Health endpoint - 健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "service is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
