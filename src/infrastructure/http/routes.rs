//! HTTP Routes
//!
//! API Endpoints:
//! - /v1/audio/speech   POST  合成语音（OpenAI 兼容）
//! - /audio/speech      POST  同上（兼容路径）
//! - /health            GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/audio/speech", post(handlers::create_speech))
        .route("/audio/speech", post(handlers::create_speech))
        .route("/health", get(handlers::health))
}
