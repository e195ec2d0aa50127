//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（TtsEngine）
//! - commands: 合成命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

pub use commands::{handlers::SynthesizeSpeechHandler, SynthesisResult, SynthesizeSpeech};
pub use error::ApplicationError;
pub use ports::{SynthesisAudio, SynthesisRequest, TtsEnginePort, TtsError};
