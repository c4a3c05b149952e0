//! Generate Commands - 内容生成命令

/// 生成内容命令
///
/// 字段均为调用方原始输入，校验在处理器中完成
#[derive(Debug, Clone, Default)]
pub struct GenerateContent {
    pub topic: String,
    pub format: String,
    pub additional_context: String,
    pub prompt_only: bool,
    /// 调用方提供的凭证，优先于默认凭证
    pub credential: Option<String>,
}
