//! Domain Layer - 领域层
//!
//! - Speech Context: 语音合成请求的值对象与规则
//! - 文本清洗器: 上游提交前的字符白名单过滤

pub mod speech;

mod text_sanitizer;

pub use text_sanitizer::{char_len, has_speakable_content, sanitize_text, ALLOWED_PUNCTUATION};
