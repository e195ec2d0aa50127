//! Synthesize Command Handlers

use std::sync::Arc;

use crate::application::commands::synthesize_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{SynthesisRequest, TtsEnginePort};
use crate::domain::speech::{CharacterUsage, SpeechError, TextLimit};
use crate::domain::{has_speakable_content, sanitize_text};

/// SynthesizeSpeech Handler - 清洗文本并调用 TTS 引擎
pub struct SynthesizeSpeechHandler {
    tts_engine: Arc<dyn TtsEnginePort>,
    model: String,
    text_limit: TextLimit,
}

impl SynthesizeSpeechHandler {
    pub fn new(tts_engine: Arc<dyn TtsEnginePort>, model: impl Into<String>, text_limit: TextLimit) -> Self {
        Self {
            tts_engine,
            model: model.into(),
            text_limit,
        }
    }

    pub async fn handle(&self, cmd: SynthesizeSpeech) -> Result<SynthesisResult, ApplicationError> {
        // 长度限制作用于原始输入
        let text = self.text_limit.apply(&cmd.input)?;

        let text = sanitize_text(&text);
        if !has_speakable_content(&text) {
            return Err(SpeechError::NothingToSpeak.into());
        }

        let usage = CharacterUsage::from_text(&text);

        tracing::debug!(
            voice_id = %cmd.voice,
            format = %cmd.format,
            input_chars = cmd.input.chars().count(),
            sanitized_chars = usage.prompt_chars,
            "Submitting synthesis request"
        );

        let request = SynthesisRequest {
            text,
            voice_id: cmd.voice.clone(),
            model: self.model.clone(),
            format: cmd.format,
        };

        let audio = self.tts_engine.synthesize(request).await?;

        tracing::info!(
            voice_id = %cmd.voice,
            model = %self.model,
            audio_size = audio.audio_data.len(),
            prompt_chars = usage.prompt_chars,
            total_chars = usage.total_chars,
            "Speech synthesized"
        );

        Ok(SynthesisResult {
            audio_data: audio.audio_data,
            format: cmd.format,
            model: self.model.clone(),
            voice_id: cmd.voice,
            usage,
        })
    }
}
