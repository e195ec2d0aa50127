//! TTS Engine Port - TTS 合成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::{ResponseFormat, VoiceId};

/// 错误类型：上游拒绝或缺少音频
pub const API_ERROR: &str = "api_error";
/// 错误类型：传输、超时、解析失败
pub const PROCESSING_ERROR: &str = "processing_error";

/// TTS 错误
#[derive(Debug, Clone, Error)]
pub enum TtsError {
    /// 上游返回非零状态码
    #[error("MiniMax TTS error: {message}")]
    Rejected { status_code: i64, message: String },

    /// 状态码为 0 但缺少音频字段
    #[error("upstream response is missing audio data")]
    MissingAudio,

    #[error("TTS processing error: request timeout")]
    Timeout,

    #[error("TTS processing error: {0}")]
    NetworkError(String),

    #[error("TTS processing error: {0}")]
    InvalidResponse(String),
}

impl TtsError {
    /// 对外暴露的错误类型
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Rejected { .. } | Self::MissingAudio => API_ERROR,
            Self::Timeout | Self::NetworkError(_) | Self::InvalidResponse(_) => PROCESSING_ERROR,
        }
    }

    /// 机器可读的错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "minimax_tts_error",
            Self::MissingAudio => "missing_audio_data",
            Self::Timeout | Self::NetworkError(_) | Self::InvalidResponse(_) => {
                "tts_processing_error"
            }
        }
    }
}

/// TTS 合成请求（文本已清洗）
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: VoiceId,
    pub model: String,
    pub format: ResponseFormat,
}

/// TTS 合成结果
#[derive(Debug, Clone)]
pub struct SynthesisAudio {
    /// 解码后的原始音频
    pub audio_data: Vec<u8>,
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口。单次调用，不重试。
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisAudio, TtsError>;
}
