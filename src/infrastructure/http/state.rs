//! Application State

use std::sync::Arc;

use crate::application::{SynthesizeSpeechHandler, TtsEnginePort};
use crate::domain::speech::TextLimit;

/// 应用状态
///
/// 启动后只读，所有请求共享
pub struct AppState {
    pub synthesize_handler: SynthesizeSpeechHandler,
}

impl AppState {
    pub fn new(tts_engine: Arc<dyn TtsEnginePort>, model: impl Into<String>, text_limit: TextLimit) -> Self {
        Self {
            synthesize_handler: SynthesizeSpeechHandler::new(tts_engine, model, text_limit),
        }
    }
}
