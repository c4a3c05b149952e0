//! Shaya Content - REST API 服务
//!
//! 启动顺序：加载配置 → 初始化日志 → 创建生成后端 → 启动 HTTP 服务器

use shaya_content::config::{load_config, print_config};
use shaya_content::domain::VoiceProfile;
use shaya_content::infrastructure::create_generator;
use shaya_content::infrastructure::http::{AppState, HttpServer, ServerConfig};
use shaya_content::logging::{init_logging, LogTarget};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：ANTHROPIC_API_KEY > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log, LogTarget::Stdout);

    tracing::info!("Shaya Sussman Content Generator API v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let generator = create_generator(&config.generation)?;
    let state = AppState::new(
        VoiceProfile::SHAYA_SUSSMAN,
        generator,
        config.generation.default_credential(),
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_cors(config.cors.clone());
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
