//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. ANTHROPIC_API_KEY（默认凭证）
//! 2. 环境变量（SHAYA_ 前缀）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 提供默认凭证的环境变量
pub const CREDENTIAL_ENV_VAR: &str = "ANTHROPIC_API_KEY";

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

/// 加载应用配置
///
/// 进程启动时调用一次，凭证在此处解析后随配置显式传递
///
/// # 环境变量示例
/// - `ANTHROPIC_API_KEY=sk-ant-...`
/// - `SHAYA_SERVER__PORT=9000`
/// - `SHAYA_GENERATION__PROVIDER=disabled`
/// - `SHAYA_CORS__ALLOWED_ORIGINS=https://a.example,https://b.example`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let credential = std::env::var(CREDENTIAL_ENV_VAR)
        .ok()
        .filter(|key| !key.trim().is_empty());
    build_config(config_path, credential)
}

fn build_config(
    config_path: Option<&Path>,
    credential: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("generation.provider", "anthropic")?
        .set_default("generation.base_url", "https://api.anthropic.com")?
        .set_default("generation.model", "claude-sonnet-4-20250514")?
        .set_default("generation.max_tokens", 2000)?
        .set_default("generation.api_version", "2023-06-01")?
        .set_default("cors.allowed_origins", vec!["*"])?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 前缀: SHAYA_，层级分隔符: __
    // 列表值以逗号分隔
    builder = builder.add_source(
        Environment::with_prefix("SHAYA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("cors.allowed_origins"),
    );

    // 4. 默认凭证（最高优先级）
    builder = builder.set_override_option("generation.api_key", credential)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.generation.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Generation base URL cannot be empty".to_string(),
        ));
    }

    if config.generation.model.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Generation model cannot be empty".to_string(),
        ));
    }

    if config.generation.max_tokens == 0 {
        return Err(ConfigError::ValidationError(
            "Generation max_tokens must be greater than 0".to_string(),
        ));
    }

    if config
        .cors
        .allowed_origins
        .iter()
        .any(|origin| origin.trim().is_empty())
    {
        return Err(ConfigError::ValidationError(
            "CORS origins cannot contain empty entries".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
///
/// 凭证只显示是否已配置
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    for line in config_summary(config) {
        tracing::info!("{}", line);
    }
    tracing::info!("=================================");
}

/// 配置摘要，凭证只显示是否存在
fn config_summary(config: &AppConfig) -> Vec<String> {
    let api_key = if config.generation.default_credential().is_some() {
        "configured"
    } else {
        "not configured"
    };

    vec![
        format!("Server: {}", config.server.addr()),
        format!("Generation Provider: {:?}", config.generation.provider),
        format!("Generation Base URL: {}", config.generation.base_url),
        format!("Generation Model: {}", config.generation.model),
        format!("Generation Max Tokens: {}", config.generation.max_tokens),
        format!("Default API Key: {}", api_key),
        format!("CORS Origins: {}", config.cors.allowed_origins.join(", ")),
        format!("Log Level: {}", config.log.level),
    ]
}
