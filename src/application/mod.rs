//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口（GenerationPort）
//! - commands: 生成内容命令及处理器
//! - queries: 人设、格式、系统提示词、健康状态查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{GenerateContentHandler, GeneratedContent},
    GenerateContent,
};

pub use error::ApplicationError;

pub use ports::{CompletionRequest, GenerationError, GenerationPort};

pub use queries::{
    handlers::{
        FormatInfo, HealthHandler, HealthStatus, ListFormatsHandler, SystemPromptHandler,
        VoiceProfileHandler, VoiceProfileView,
    },
    GetHealth, GetSystemPrompt, GetVoiceProfile, ListFormats,
};
