//! Data Transfer Objects
//!
//! 入站请求格式与 OpenAI `/v1/audio/speech` 兼容：
//! `{"input": "...", "voice": "...", "response_format": "mp3" | "wav"}`
//! 其他字段（model、speed 等）忽略。

use axum::http::{header, HeaderMap};
use serde::Serialize;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::application::SynthesizeSpeech;
use crate::domain::speech::{ResponseFormat, SpeechError, VoiceId};

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// Content-Type 是否为 JSON（`application/json` 或 `application/*+json`）
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// 解析并校验合成请求
///
/// 校验顺序：JSON → input → voice → input 非空 → response_format。
/// 任一步失败立即返回，不会调用上游。
pub fn parse_speech_request(headers: &HeaderMap, body: &[u8]) -> Result<SynthesizeSpeech, ApiError> {
    if !is_json_content_type(headers) {
        return Err(ApiError::invalid_request("request must be JSON"));
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| ApiError::invalid_request("request must be JSON"))?;

    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);

    let input = match fields.get("input") {
        None | Some(Value::Null) => return Err(ApiError::invalid_request("missing input text")),
        Some(Value::String(s)) => s,
        Some(_) => return Err(ApiError::invalid_request("input must be a string")),
    };

    let voice = match fields.get("voice") {
        Some(Value::String(s)) => VoiceId::new(s.as_str())?,
        _ => return Err(SpeechError::MissingVoice.into()),
    };

    if input.trim().is_empty() {
        return Err(SpeechError::EmptyText.into());
    }

    let format = match fields.get("response_format") {
        None | Some(Value::Null) => ResponseFormat::default(),
        Some(Value::String(s)) => ResponseFormat::parse(s)?,
        Some(other) => return Err(SpeechError::UnsupportedFormat(other.to_string()).into()),
    };

    Ok(SynthesizeSpeech {
        input: input.clone(),
        voice,
        format,
    })
}
