//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 兼容旧部署的扁平环境变量（MINIMAX_API_KEY、SERVER_PORT、MAX_TEXT_LENGTH）
//! 2. 带前缀的环境变量（TTS_ADAPTER_）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "TTS_ADAPTER";

/// 扁平环境变量 → 配置键
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("MINIMAX_API_KEY", "minimax.api_key"),
    ("SERVER_PORT", "server.port"),
    ("MAX_TEXT_LENGTH", "text.max_length"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `MINIMAX_API_KEY=...`
/// - `SERVER_PORT=5000`
/// - `TTS_ADAPTER_MINIMAX__MODEL=speech-02-turbo`
/// - `TTS_ADAPTER_TEXT__OVERFLOW=truncate`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let env: HashMap<String, String> = std::env::vars().collect();
    load_config_from(None, &env)
}

/// 从指定路径和环境变量集合加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `env` - 环境变量快照
pub fn load_config_from(
    config_path: Option<&Path>,
    env: &HashMap<String, String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("minimax.api_key", "")?
        .set_default("minimax.base_url", "https://api.minimaxi.chat")?
        .set_default("minimax.model", "speech-2.6-hd")?
        .set_default("minimax.timeout_secs", 60)?
        .set_default("text.max_length", 2000)?
        .set_default("text.overflow", "reject")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，层级分隔符 __
    // 例如: TTS_ADAPTER_MINIMAX__BASE_URL=https://api.minimax.io
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(env.clone())),
    );

    // 4. 扁平环境变量（最高优先级）
    for (var, key) in LEGACY_ENV_KEYS {
        builder = builder.set_override_option(*key, env.get(*var).cloned())?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.minimax.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "MiniMax API key is required (set MINIMAX_API_KEY)".to_string(),
        ));
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    let base_url = &config.minimax.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "MiniMax base URL must be an http(s) URL: {:?}",
            base_url
        )));
    }

    if config.minimax.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "MiniMax model cannot be empty".to_string(),
        ));
    }

    if config.minimax.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "MiniMax timeout cannot be 0".to_string(),
        ));
    }

    if config.text.max_length == 0 {
        return Err(ConfigError::ValidationError(
            "Max text length cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("MiniMax URL: {}", config.minimax.base_url);
    tracing::info!("MiniMax API Key: {}", config.minimax.masked_api_key());
    tracing::info!("MiniMax Model: {}", config.minimax.model);
    tracing::info!("MiniMax Timeout: {}s", config.minimax.timeout_secs);
    tracing::info!(
        "Max Text Length: {} ({:?})",
        config.text.max_length,
        config.text.overflow
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::speech::OverflowPolicy;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.minimax.api_key = "test-key".to_string();
        config
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let file = toml_file("");
        let err = load_config_from(Some(file.path()), &env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_legacy_env_variables() {
        let file = toml_file("");
        let config = load_config_from(
            Some(file.path()),
            &env(&[
                ("MINIMAX_API_KEY", "legacy-key"),
                ("SERVER_PORT", "8080"),
                ("MAX_TEXT_LENGTH", "500"),
            ]),
        )
        .unwrap();

        assert_eq!(config.minimax.api_key, "legacy-key");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.text.max_length, 500);
        assert_eq!(config.minimax.model, "speech-2.6-hd");
    }

    #[test]
    fn test_prefixed_env_overrides_file() {
        let file = toml_file(
            r#"
[minimax]
api_key = "file-key"
model = "speech-02-hd"

[text]
overflow = "truncate"
"#,
        );
        let config = load_config_from(
            Some(file.path()),
            &env(&[("TTS_ADAPTER_MINIMAX__MODEL", "speech-02-turbo")]),
        )
        .unwrap();

        assert_eq!(config.minimax.api_key, "file-key");
        assert_eq!(config.minimax.model, "speech-02-turbo");
        assert_eq!(config.text.overflow, OverflowPolicy::Truncate);
    }

    #[test]
    fn test_legacy_env_overrides_prefixed() {
        let file = toml_file("");
        let config = load_config_from(
            Some(file.path()),
            &env(&[
                ("TTS_ADAPTER_MINIMAX__API_KEY", "prefixed-key"),
                ("MINIMAX_API_KEY", "legacy-key"),
            ]),
        )
        .unwrap();

        assert_eq!(config.minimax.api_key, "legacy-key");
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_bad_base_url() {
        let mut config = valid_config();
        config.minimax.base_url = "api.minimaxi.chat".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_max_length() {
        let mut config = valid_config();
        config.text.max_length = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = valid_config();
        config.minimax.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }
}
