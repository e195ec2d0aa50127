//! MiniMax Speech Adapter
//!
//! 启动流程：加载配置 → 初始化日志 → 创建 MiniMax 客户端 → 启动 HTTP 服务器

use std::sync::Arc;

use minimax_speech_adapter::config::{load_config, print_config};
use minimax_speech_adapter::infrastructure::adapters::{MinimaxTtsClient, MinimaxTtsClientConfig};
use minimax_speech_adapter::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（缺少 API Key 时拒绝启动）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},minimax_speech_adapter={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("MiniMax Speech Adapter v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 创建 MiniMax TTS 引擎
    let tts_config = MinimaxTtsClientConfig::new(
        config.minimax.base_url.clone(),
        config.minimax.api_key.clone(),
    )
    .with_timeout(config.minimax.timeout_secs);
    let tts_engine = Arc::new(MinimaxTtsClient::new(tts_config)?);

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(tts_engine, config.minimax.model.clone(), config.text.limit());
    let server = HttpServer::new(server_config, state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
