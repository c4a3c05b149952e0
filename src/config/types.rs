//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 生成后端配置
    #[serde(default)]
    pub generation: GenerationConfig,

    /// 跨域配置
    #[serde(default)]
    pub cors: CorsConfig,

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
    8000
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

/// 生成后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationProvider {
    /// Anthropic Messages API
    #[default]
    Anthropic,
    /// 不接入任何后端，模型调用一律返回 ClientUnavailable
    Disabled,
}

/// 生成后端配置
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub provider: GenerationProvider,

    /// 默认凭证（来自 ANTHROPIC_API_KEY）
    #[serde(default)]
    pub api_key: Option<String>,

    /// API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 模型标识
    #[serde(default = "default_model")]
    pub model: String,

    /// 最大输出 token 数
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// anthropic-version 请求头
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: GenerationProvider::default(),
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_version: default_api_version(),
        }
    }
}

impl GenerationConfig {
    /// 非空的默认凭证
    pub fn default_credential(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }
}

/// 跨域配置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// 允许的来源，包含 "*" 时允许任意来源
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.generation.provider, GenerationProvider::Anthropic);
        assert_eq!(config.generation.model, "claude-sonnet-4-20250514");
        assert_eq!(config.generation.max_tokens, 2000);
        assert!(config.cors.allows_any_origin());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_default_credential_ignores_blank() {
        let mut config = GenerationConfig::default();
        assert_eq!(config.default_credential(), None);

        config.api_key = Some("  ".to_string());
        assert_eq!(config.default_credential(), None);

        config.api_key = Some("sk-ant-test".to_string());
        assert_eq!(config.default_credential().as_deref(), Some("sk-ant-test"));
    }

    #[test]
    fn test_named_origins() {
        let cors = CorsConfig {
            allowed_origins: vec!["https://example.org".to_string()],
        };
        assert!(!cors.allows_any_origin());
    }
}
