//! HTTP Error Handling
//!
//! 错误响应格式: `{"error": {"message": "...", "type": "...", "code": "..."}}`

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, TtsError};
use crate::domain::speech::SpeechError;

/// 客户端错误类型
pub const INVALID_REQUEST: &str = "invalid_request";

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>, error_type: impl Into<String>, code: Option<&str>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                error_type: error_type.into(),
                code: code.map(str::to_string),
            },
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求不合法（400）
    InvalidRequest(String),
    /// 请求体超过上限（413）
    PayloadTooLarge(String),
    /// 上游或处理失败（500）
    Synthesis(TtsError),
}

impl ApiError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Synthesis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let payload = match &self {
            ApiError::InvalidRequest(msg) | ApiError::PayloadTooLarge(msg) => {
                tracing::warn!(error_type = INVALID_REQUEST, error = %msg, "Invalid request");
                ErrorPayload::new(msg.clone(), INVALID_REQUEST, None)
            }
            ApiError::Synthesis(err) => {
                tracing::error!(
                    error_type = err.error_type(),
                    code = err.code(),
                    error = %err,
                    "Speech synthesis failed"
                );
                ErrorPayload::new(err.to_string(), err.error_type(), Some(err.code()))
            }
        };

        (status, Json(payload)).into_response()
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge("request body too large".to_string())
        } else {
            ApiError::InvalidRequest(rejection.body_text())
        }
    }
}

impl From<SpeechError> for ApiError {
    fn from(e: SpeechError) -> Self {
        ApiError::InvalidRequest(e.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Validation(err) => err.into(),
            ApplicationError::Tts(err) => ApiError::Synthesis(err),
        }
    }
}
