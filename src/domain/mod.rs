//! Domain Layer - 领域层
//!
//! 全部为静态数据与纯函数:
//! - Voice: 写作人设（VoiceProfile）
//! - Format: 内容格式及其结构说明（FormatCatalog）
//! - Prompt: 请求校验与提示词组装（PromptComposer）

mod errors;

pub mod format;
pub mod prompt;
pub mod voice;

pub use errors::DomainError;
pub use format::{ContentFormat, FormatCatalog, FormatEntry};
pub use prompt::{ComposedPrompt, GenerationRequest, PromptComposer, Topic};
pub use voice::VoiceProfile;
