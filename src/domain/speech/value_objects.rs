//! Speech Context - Value Objects

use serde::{Deserialize, Serialize};

use super::SpeechError;
use crate::domain::char_len;

/// 上游音色 ID（原样透传，不做格式校验）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Result<Self, SpeechError> {
        let id = id.into();
        if id.is_empty() {
            return Err(SpeechError::MissingVoice);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 输出音频格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Mp3,
    Wav,
}

impl ResponseFormat {
    pub fn parse(value: &str) -> Result<Self, SpeechError> {
        match value {
            "mp3" => Ok(Self::Mp3),
            "wav" => Ok(Self::Wav),
            other => Err(SpeechError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    /// 响应的 Content-Type
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
        }
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 超长文本的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// 拒绝请求（400）
    #[default]
    Reject,
    /// 截断到最大长度后继续
    Truncate,
}

/// 文本长度限制
///
/// 长度按 Unicode 标量值计算，作用于清洗前的原始输入。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLimit {
    pub max_chars: usize,
    pub overflow: OverflowPolicy,
}

impl TextLimit {
    pub fn new(max_chars: usize, overflow: OverflowPolicy) -> Self {
        Self {
            max_chars,
            overflow,
        }
    }

    /// 应用长度限制，返回允许提交的文本
    pub fn apply(&self, text: &str) -> Result<String, SpeechError> {
        let length = char_len(text);
        if length <= self.max_chars {
            return Ok(text.to_string());
        }

        match self.overflow {
            OverflowPolicy::Reject => Err(SpeechError::TextTooLong {
                length,
                max: self.max_chars,
            }),
            OverflowPolicy::Truncate => Ok(text.chars().take(self.max_chars).collect()),
        }
    }
}

/// 用量统计
///
/// 占位指标：按清洗后文本的字符数计数，不是分词意义上的 token 数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterUsage {
    pub prompt_chars: usize,
    pub completion_chars: usize,
    pub total_chars: usize,
}

impl CharacterUsage {
    pub fn from_text(sanitized: &str) -> Self {
        let prompt_chars = char_len(sanitized);
        Self {
            prompt_chars,
            completion_chars: 0,
            total_chars: prompt_chars,
        }
    }
}
