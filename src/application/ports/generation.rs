//! Generation Port - 文本生成后端抽象
//!
//! 具体实现在 infrastructure/adapters 层（真实 API 客户端或桩实现）

use async_trait::async_trait;
use thiserror::Error;

/// 生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No API key provided")]
    MissingCredential,

    #[error("Generation client unavailable: {0}")]
    ClientUnavailable(String),

    #[error("{}", upstream_message(.status, .message))]
    Upstream {
        status: Option<u16>,
        message: String,
    },
}

fn upstream_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP {}: {}", code, message),
        None => message.to_string(),
    }
}

impl GenerationError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            status: None,
            message: message.into(),
        }
    }
}

/// 单次生成请求
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    /// 调用方提供的凭证，仅透传给上游
    pub credential: String,
}

/// Generation Port
///
/// 一次调用对应一次上游请求，不重试
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// 返回模型响应中的第一段文本
    async fn generate(&self, request: CompletionRequest) -> Result<String, GenerationError>;

    /// 后端标识（用于日志）
    fn backend(&self) -> &str;
}
