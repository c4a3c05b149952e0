//! Prompt Context - 提示词组装
//!
//! 职责:
//! - 生成请求的校验（主题非空、格式合法）
//! - 将人设、格式说明与请求确定性地拼接为提示词

mod composer;
mod request;

pub use composer::{ComposedPrompt, PromptComposer};
pub use request::{GenerationRequest, Topic};
