//! Speech Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("missing voice parameter")]
    MissingVoice,

    #[error("input text cannot be empty")]
    EmptyText,

    #[error("unsupported response_format: {0}")]
    UnsupportedFormat(String),

    #[error("input text exceeds maximum length of {max} characters")]
    TextTooLong { length: usize, max: usize },

    /// 清洗后只剩空白：直接拒绝，不把空文本提交给上游
    #[error("input text contains no speakable characters")]
    NothingToSpeak,
}
