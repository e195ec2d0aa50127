//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 不调用上游，返回预设的音频或错误，并记录收到的请求

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SynthesisAudio, SynthesisRequest, TtsEnginePort, TtsError};

/// Fake TTS Client
pub struct FakeTtsClient {
    outcome: Result<Vec<u8>, TtsError>,
    requests: Mutex<Vec<SynthesisRequest>>,
}

impl FakeTtsClient {
    /// 始终返回固定音频
    pub fn with_audio(audio_data: Vec<u8>) -> Self {
        Self {
            outcome: Ok(audio_data),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 始终返回指定错误
    pub fn failing(error: TtsError) -> Self {
        Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的请求
    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisAudio, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice_id = %request.voice_id,
            "FakeTtsClient: returning canned outcome"
        );

        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);

        self.outcome
            .clone()
            .map(|audio_data| SynthesisAudio { audio_data })
    }
}
