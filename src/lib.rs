//! MiniMax Speech Adapter - OpenAI 兼容的 TTS 转发服务
//!
//! 把 OpenAI `/v1/audio/speech` 请求翻译为 MiniMax `t2a_v2` 请求，返回音频字节
//!
//! 领域层 (domain/):
//! - Speech Context: 音色、输出格式、文本长度策略、用量统计
//! - 文本清洗器
//!
//! 应用层 (application/):
//! - Ports: TtsEngine
//! - Commands: SynthesizeSpeech 及处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: MiniMax TTS Client
//! - HTTP: axum 路由、校验、错误格式

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
