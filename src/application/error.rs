//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::TtsError;
use crate::domain::speech::SpeechError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求校验失败（不会调用上游）
    #[error(transparent)]
    Validation(#[from] SpeechError),

    /// 上游或处理错误
    #[error(transparent)]
    Tts(#[from] TtsError),
}
