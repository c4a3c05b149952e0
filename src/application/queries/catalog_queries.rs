//! Catalog Queries

/// 获取人设
#[derive(Debug, Clone)]
pub struct GetVoiceProfile;

/// 列出所有格式
#[derive(Debug, Clone)]
pub struct ListFormats;

/// 获取系统提示词
#[derive(Debug, Clone)]
pub struct GetSystemPrompt;

/// 健康检查
#[derive(Debug, Clone)]
pub struct GetHealth;
