//! MiniMax TTS Client - 调用 MiniMax t2a_v2 接口
//!
//! 实现 TtsEnginePort trait，把内部请求翻译为 MiniMax 的请求格式
//!
//! 外部 TTS API:
//! POST {base_url}/v1/t2a_v2
//! Request: {"text": "...", "model": "...", "voice_setting": {...}, "response_format": "mp3", "stream": false}
//! Response: {"base_resp": {"status_code": 0, "status_msg": "success"}, "data": {"audio": "<hex>"}}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{SynthesisAudio, SynthesisRequest, TtsEnginePort, TtsError};

/// 合成接口路径
pub const T2A_PATH: &str = "/v1/t2a_v2";

/// 固定语速
const VOICE_SPEED: f32 = 1.0;
/// 固定音量
const VOICE_VOLUME: f32 = 1.0;

/// 上游请求体
#[derive(Debug, Serialize)]
struct UpstreamRequest<'a> {
    text: &'a str,
    model: &'a str,
    voice_setting: VoiceSetting<'a>,
    response_format: &'a str,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct VoiceSetting<'a> {
    voice_id: &'a str,
    speed: f32,
    vol: f32,
}

/// 上游响应体
#[derive(Debug, Deserialize)]
struct UpstreamResponse {
    #[serde(default)]
    base_resp: Option<BaseResp>,
    #[serde(default)]
    data: Option<UpstreamData>,
}

#[derive(Debug, Deserialize)]
struct BaseResp {
    #[serde(default)]
    status_code: Option<i64>,
    #[serde(default)]
    status_msg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamData {
    #[serde(default)]
    audio: Option<String>,
}

/// 解析上游响应，返回解码后的音频
fn decode_upstream_response(response: UpstreamResponse) -> Result<Vec<u8>, TtsError> {
    let (status_code, status_msg) = match response.base_resp {
        Some(base) => (base.status_code, base.status_msg),
        None => (None, None),
    };

    if status_code != Some(0) {
        return Err(TtsError::Rejected {
            status_code: status_code.unwrap_or(-1),
            message: status_msg.unwrap_or_else(|| "unknown error".to_string()),
        });
    }

    let audio_hex = response
        .data
        .and_then(|data| data.audio)
        // 空字符串与 null 一样按缺少音频处理
        .filter(|audio| !audio.is_empty())
        .ok_or(TtsError::MissingAudio)?;

    hex::decode(audio_hex.trim())
        .map_err(|e| TtsError::InvalidResponse(format!("invalid hex audio data: {}", e)))
}

/// MiniMax 客户端配置
#[derive(Debug, Clone)]
pub struct MinimaxTtsClientConfig {
    /// 上游基础 URL
    pub base_url: String,
    /// Bearer 凭证
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl MinimaxTtsClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: 60,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// MiniMax TTS 客户端
///
/// 单次请求，不重试；所有传输和解析失败都转为 TtsError
pub struct MinimaxTtsClient {
    client: Client,
    config: MinimaxTtsClientConfig,
}

impl MinimaxTtsClient {
    pub fn new(config: MinimaxTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 合成接口 URL
    fn synthesis_url(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), T2A_PATH)
    }
}

fn map_send_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Timeout
    } else if e.is_connect() {
        TtsError::NetworkError(format!("cannot connect to MiniMax: {}", e))
    } else {
        TtsError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl TtsEnginePort for MinimaxTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisAudio, TtsError> {
        let url = self.synthesis_url();
        let payload = UpstreamRequest {
            text: &request.text,
            model: &request.model,
            voice_setting: VoiceSetting {
                voice_id: request.voice_id.as_str(),
                speed: VOICE_SPEED,
                vol: VOICE_VOLUME,
            },
            response_format: request.format.as_str(),
            stream: false,
        };

        tracing::debug!(
            url = %url,
            text_len = request.text.chars().count(),
            voice_id = %request.voice_id,
            format = %request.format,
            "Sending MiniMax t2a request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                TtsError::Timeout
            } else {
                TtsError::InvalidResponse(format!("failed to read response body: {}", e))
            }
        })?;

        // 上游在错误时也返回 JSON，HTTP 状态码只用于日志
        let parsed: UpstreamResponse = serde_json::from_slice(&body).map_err(|e| {
            TtsError::InvalidResponse(format!("HTTP {}: malformed response body: {}", status, e))
        })?;

        let audio_data = decode_upstream_response(parsed)?;

        tracing::debug!(
            http_status = %status,
            audio_size = audio_data.len(),
            "MiniMax t2a request completed"
        );

        Ok(SynthesisAudio { audio_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::speech::{ResponseFormat, VoiceId};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(text: &str, format: ResponseFormat) -> SynthesisRequest {
        SynthesisRequest {
            text: text.to_string(),
            voice_id: VoiceId::new("female-tianmei").unwrap(),
            model: "speech-2.6-hd".to_string(),
            format,
        }
    }

    fn client_for(server: &MockServer) -> MinimaxTtsClient {
        MinimaxTtsClient::new(MinimaxTtsClientConfig::new(server.uri(), "test-key")).unwrap()
    }

    fn parse(value: serde_json::Value) -> UpstreamResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_config_builder() {
        let config = MinimaxTtsClientConfig::new("https://example.com", "k").with_timeout(5);
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_synthesis_url_strips_trailing_slash() {
        let client =
            MinimaxTtsClient::new(MinimaxTtsClientConfig::new("https://api.minimaxi.chat/", "k"))
                .unwrap();
        assert_eq!(client.synthesis_url(), "https://api.minimaxi.chat/v1/t2a_v2");
    }

    #[test]
    fn test_decode_success() {
        let response = parse(json!({
            "base_resp": {"status_code": 0, "status_msg": "success"},
            "data": {"audio": "48656c6c6f"}
        }));
        assert_eq!(decode_upstream_response(response).unwrap(), b"Hello");
    }

    #[test]
    fn test_decode_rejected() {
        let response = parse(json!({
            "base_resp": {"status_code": 1004, "status_msg": "authorization failed"}
        }));
        match decode_upstream_response(response) {
            Err(TtsError::Rejected {
                status_code,
                message,
            }) => {
                assert_eq!(status_code, 1004);
                assert_eq!(message, "authorization failed");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_base_resp_is_rejection() {
        let response = parse(json!({"data": {"audio": "00"}}));
        match decode_upstream_response(response) {
            Err(TtsError::Rejected { message, .. }) => assert_eq!(message, "unknown error"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_audio() {
        for value in [
            json!({"base_resp": {"status_code": 0}}),
            json!({"base_resp": {"status_code": 0}, "data": {}}),
            json!({"base_resp": {"status_code": 0}, "data": {"audio": null}}),
            json!({"base_resp": {"status_code": 0}, "data": {"audio": ""}}),
        ] {
            assert!(matches!(
                decode_upstream_response(parse(value)),
                Err(TtsError::MissingAudio)
            ));
        }
    }

    #[test]
    fn test_decode_invalid_hex() {
        let response = parse(json!({
            "base_resp": {"status_code": 0},
            "data": {"audio": "zz"}
        }));
        assert!(matches!(
            decode_upstream_response(response),
            Err(TtsError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_request_shape_and_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/t2a_v2"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(json!({
                "text": "你好",
                "model": "speech-2.6-hd",
                "voice_setting": {"voice_id": "female-tianmei", "speed": 1.0, "vol": 1.0},
                "response_format": "wav",
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "base_resp": {"status_code": 0, "status_msg": "success"},
                "data": {"audio": "52494646"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let audio = client_for(&server)
            .synthesize(request("你好", ResponseFormat::Wav))
            .await
            .unwrap();

        assert_eq!(audio.audio_data, b"RIFF");
    }

    #[tokio::test]
    async fn test_upstream_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "base_resp": {"status_code": 2013, "status_msg": "invalid params"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .synthesize(request("你好", ResponseFormat::Mp3))
            .await
            .unwrap_err();

        assert_eq!(err.code(), "minimax_tts_error");
        assert_eq!(err.to_string(), "MiniMax TTS error: invalid params");
    }

    #[tokio::test]
    async fn test_non_json_body_is_processing_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .synthesize(request("你好", ResponseFormat::Mp3))
            .await
            .unwrap_err();

        assert!(matches!(err, TtsError::InvalidResponse(_)));
        assert_eq!(err.code(), "tts_processing_error");
    }

    #[tokio::test]
    async fn test_timeout_is_processing_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(3))
                    .set_body_json(json!({"base_resp": {"status_code": 0}})),
            )
            .mount(&server)
            .await;

        let client = MinimaxTtsClient::new(
            MinimaxTtsClientConfig::new(server.uri(), "test-key").with_timeout(1),
        )
        .unwrap();

        let err = client
            .synthesize(request("你好", ResponseFormat::Mp3))
            .await
            .unwrap_err();

        assert!(matches!(err, TtsError::Timeout));
        assert_eq!(err.code(), "tts_processing_error");
    }

    #[tokio::test]
    async fn test_connection_refused_is_processing_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = MinimaxTtsClient::new(MinimaxTtsClientConfig::new(
            format!("http://127.0.0.1:{}", port),
            "test-key",
        ))
        .unwrap();

        let err = client
            .synthesize(request("你好", ResponseFormat::Mp3))
            .await
            .unwrap_err();

        assert!(matches!(err, TtsError::NetworkError(_)));
        assert_eq!(err.error_type(), "processing_error");
    }
}
