//! Speech Handlers
//!
//! OpenAI 兼容的 `/v1/audio/speech`

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::infrastructure::http::dto::parse_speech_request;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 合成语音，成功时直接返回音频字节
pub async fn create_speech(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    // 超过 DefaultBodyLimit 时同样返回 JSON 错误
    let body = body?;
    let cmd = parse_speech_request(&headers, &body)?;

    let result = state.synthesize_handler.handle(cmd).await?;

    Ok((
        [
            (header::CONTENT_TYPE, result.format.content_type().to_string()),
            (header::CONTENT_LENGTH, result.audio_data.len().to_string()),
        ],
        result.audio_data,
    )
        .into_response())
}
