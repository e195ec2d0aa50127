//! Speech Context - 语音合成限界上下文
//!
//! 职责:
//! - 入站请求的值对象（音色、输出格式）
//! - 文本长度策略
//! - 用量统计（占位指标）

mod errors;
mod value_objects;

pub use errors::SpeechError;
pub use value_objects::{CharacterUsage, OverflowPolicy, ResponseFormat, TextLimit, VoiceId};
