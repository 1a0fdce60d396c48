//! Booknest - 图书阅读追踪
//!
//! 启动流程：加载配置 -> 初始化日志 -> 选择图书数据来源 -> 启动 HTTP 服务

use std::sync::Arc;

use booknest::application::BookApiPort;
use booknest::config::{load_config, print_config, ApiBackend, AppConfig};
use booknest::infrastructure::adapters::{HttpBookClient, HttpBookClientConfig};
use booknest::infrastructure::http::{AppState, HttpServer, ServerConfig};
use booknest::infrastructure::memory::InMemoryBookApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Booknest - book tracking");
    print_config(&config);

    let api: Arc<dyn BookApiPort> = match config.api.backend {
        ApiBackend::Http => {
            let client_config = HttpBookClientConfig::new(config.api.base_url.clone())
                .with_timeout(config.api.timeout_secs);
            Arc::new(HttpBookClient::new(client_config)?)
        }
        ApiBackend::Memory => {
            tracing::warn!("Using in-memory sample data, changes are lost on restart");
            InMemoryBookApi::seeded().arc()
        }
    };

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::with_default_routes(api));

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志：RUST_LOG 优先，否则使用配置中的级别
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},booknest={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
