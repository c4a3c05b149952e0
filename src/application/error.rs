//! 应用层错误定义
//!
//! 单次请求内的全部失败类型，均不自动重试

use thiserror::Error;

use crate::application::ports::GenerationError;
use crate::domain::DomainError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 主题为空
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// 未知格式
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// 未提供凭证，环境中也没有默认凭证
    #[error("API key required")]
    MissingCredential,

    /// 生成后端不可用
    #[error("Generation client unavailable: {0}")]
    ClientUnavailable(String),

    /// 上游调用失败
    #[error("Upstream generation failed: {0}")]
    UpstreamFailure(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyTopic => Self::EmptyTopic,
            DomainError::UnknownFormat(format) => Self::UnknownFormat(format),
        }
    }
}

impl From<GenerationError> for ApplicationError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::MissingCredential => Self::MissingCredential,
            GenerationError::ClientUnavailable(msg) => Self::ClientUnavailable(msg),
            upstream @ GenerationError::Upstream { .. } => {
                Self::UpstreamFailure(upstream.to_string())
            }
        }
    }
}
