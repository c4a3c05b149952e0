//! Shaya Content - 以固定人设生成内容的服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice: 写作人设
//! - Format: 四种内容格式及其说明
//! - Prompt: 请求校验与提示词组装
//!
//! 应用层 (application/):
//! - Ports: GenerationPort
//! - Commands: 生成内容
//! - Queries: 人设、格式、系统提示词、健康状态
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: Anthropic 客户端、不可用桩、测试用假客户端
//!
//! 命令行 (cli/): 参数解析、交互模式、输出

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::{load_config, AppConfig};
