//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{FormatInfo, GeneratedContent, HealthStatus, VoiceProfileView};
use crate::domain::ContentFormat;

// ============================================================================
// Generate
// ============================================================================

/// POST /generate 请求体
///
/// `format` 以字符串接收，由领域层解析，以便未知格式返回明确错误
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub additional_context: Option<String>,
    #[serde(default)]
    pub prompt_only: bool,
}

fn default_format() -> String {
    ContentFormat::default().as_str().to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
    pub format: String,
    pub topic: String,
    pub prompt_only: bool,
}

impl From<GeneratedContent> for GenerateResponse {
    fn from(result: GeneratedContent) -> Self {
        Self {
            content: result.content,
            format: result.format.as_str().to_string(),
            topic: result.topic,
            prompt_only: result.prompt_only,
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceProfileResponse {
    pub name: String,
    pub tone: String,
    pub style_patterns: String,
    pub themes: String,
    pub influences: String,
    pub hebrew_vocabulary: String,
    pub transitions: String,
}

impl From<VoiceProfileView> for VoiceProfileResponse {
    fn from(view: VoiceProfileView) -> Self {
        Self {
            name: view.name,
            tone: view.tone,
            style_patterns: view.style_patterns,
            themes: view.themes,
            influences: view.influences,
            hebrew_vocabulary: view.hebrew_vocabulary,
            transitions: view.transitions,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatInfoResponse {
    pub name: String,
    pub description: String,
    pub instructions: String,
}

impl From<FormatInfo> for FormatInfoResponse {
    fn from(info: FormatInfo) -> Self {
        Self {
            name: info.name.to_string(),
            description: info.description.to_string(),
            instructions: info.instructions.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SystemPromptResponse {
    pub system_prompt: String,
}

// ============================================================================
// System
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub api_key_configured: bool,
}

impl From<HealthStatus> for HealthResponse {
    fn from(status: HealthStatus) -> Self {
        Self {
            status: status.status.to_string(),
            api_key_configured: status.api_key_configured,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: EndpointsInfo,
}

#[derive(Debug, Serialize)]
pub struct EndpointsInfo {
    pub generate: &'static str,
    pub formats: &'static str,
    pub voice_profile: &'static str,
    pub system_prompt: &'static str,
    pub health: &'static str,
}
