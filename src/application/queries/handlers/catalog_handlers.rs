//! Catalog Query Handlers

use crate::application::queries::{GetHealth, GetSystemPrompt, GetVoiceProfile, ListFormats};
use crate::domain::{FormatCatalog, PromptComposer, VoiceProfile};

// ============================================================================
// Response DTOs
// ============================================================================

/// 人设视图（各字段已 trim）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceProfileView {
    pub name: String,
    pub tone: String,
    pub style_patterns: String,
    pub themes: String,
    pub influences: String,
    pub hebrew_vocabulary: String,
    pub transitions: String,
}

impl From<VoiceProfile> for VoiceProfileView {
    fn from(profile: VoiceProfile) -> Self {
        let profile = profile.trimmed();
        Self {
            name: profile.name.to_string(),
            tone: profile.tone.to_string(),
            style_patterns: profile.style_patterns.to_string(),
            themes: profile.themes.to_string(),
            influences: profile.influences.to_string(),
            hebrew_vocabulary: profile.hebrew_vocabulary.to_string(),
            transitions: profile.transitions.to_string(),
        }
    }
}

/// 格式信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
}

/// 健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub api_key_configured: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetVoiceProfile Handler
pub struct VoiceProfileHandler {
    profile: VoiceProfile,
}

impl VoiceProfileHandler {
    pub fn new(profile: VoiceProfile) -> Self {
        Self { profile }
    }

    pub fn handle(&self, _query: GetVoiceProfile) -> VoiceProfileView {
        VoiceProfileView::from(self.profile)
    }
}

/// ListFormats Handler
pub struct ListFormatsHandler;

impl ListFormatsHandler {
    pub fn handle(&self, _query: ListFormats) -> Vec<FormatInfo> {
        FormatCatalog::entries()
            .map(|entry| FormatInfo {
                name: entry.format.as_str(),
                description: entry.description,
                instructions: entry.trimmed_instructions(),
            })
            .collect()
    }
}

/// GetSystemPrompt Handler
pub struct SystemPromptHandler {
    composer: PromptComposer,
}

impl SystemPromptHandler {
    pub fn new(composer: PromptComposer) -> Self {
        Self { composer }
    }

    pub fn handle(&self, _query: GetSystemPrompt) -> String {
        self.composer.system_prompt()
    }
}

/// GetHealth Handler
///
/// 只报告默认凭证是否存在，不做上游探测
pub struct HealthHandler {
    api_key_configured: bool,
}

impl HealthHandler {
    pub fn new(api_key_configured: bool) -> Self {
        Self { api_key_configured }
    }

    pub fn handle(&self, _query: GetHealth) -> HealthStatus {
        HealthStatus {
            status: "healthy",
            api_key_configured: self.api_key_configured,
        }
    }
}
