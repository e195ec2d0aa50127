//! Synthesize Commands - 语音合成命令

use crate::domain::speech::{CharacterUsage, ResponseFormat, VoiceId};

/// 语音合成命令（入站请求已通过边界校验）
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    /// 原始输入文本（未清洗）
    pub input: String,
    pub voice: VoiceId,
    pub format: ResponseFormat,
}

/// 语音合成结果
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio_data: Vec<u8>,
    pub format: ResponseFormat,
    pub model: String,
    pub voice_id: VoiceId,
    pub usage: CharacterUsage,
}
