//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::speech::{OverflowPolicy, TextLimit};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// MiniMax 上游配置
    #[serde(default)]
    pub minimax: MinimaxConfig,

    /// 文本限制
    #[serde(default)]
    pub text: TextConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MiniMax 上游配置
#[derive(Debug, Clone, Deserialize)]
pub struct MinimaxConfig {
    /// API Key（必填）
    #[serde(default)]
    pub api_key: String,

    /// 上游基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 合成模型
    #[serde(default = "default_model")]
    pub model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.minimaxi.chat".to_string()
}

fn default_model() -> String {
    "speech-2.6-hd".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
        }
    }
}

impl MinimaxConfig {
    /// 脱敏后的 API Key（用于日志）
    pub fn masked_api_key(&self) -> String {
        let visible: String = self.api_key.chars().take(4).collect();
        if self.api_key.chars().count() <= 8 {
            "****".to_string()
        } else {
            format!("{}****", visible)
        }
    }
}

/// 文本限制配置
#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    /// 最大字符数
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// 超长处理策略: reject / truncate
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

fn default_max_length() -> usize {
    2000
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            overflow: OverflowPolicy::default(),
        }
    }
}

impl TextConfig {
    pub fn limit(&self) -> TextLimit {
        TextLimit::new(self.max_length, self.overflow)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
