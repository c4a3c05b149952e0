//! Application State
//!
//! 所有请求共享的只读状态，无需同步

use std::sync::Arc;

use crate::application::{
    GenerateContentHandler, GenerationPort, HealthHandler, ListFormatsHandler,
    SystemPromptHandler, VoiceProfileHandler,
};
use crate::domain::{PromptComposer, VoiceProfile};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub generate_handler: GenerateContentHandler,

    // ========== Query Handlers ==========
    pub voice_profile_handler: VoiceProfileHandler,
    pub list_formats_handler: ListFormatsHandler,
    pub system_prompt_handler: SystemPromptHandler,
    pub health_handler: HealthHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `default_credential` 在启动时解析一次，请求头中的凭证优先于它
    pub fn new(
        profile: VoiceProfile,
        generator: Arc<dyn GenerationPort>,
        default_credential: Option<String>,
    ) -> Self {
        let composer = PromptComposer::new(profile);
        let generate_handler = GenerateContentHandler::new(composer, generator, default_credential);
        let api_key_configured = generate_handler.has_default_credential();

        Self {
            generate_handler,
            voice_profile_handler: VoiceProfileHandler::new(profile),
            list_formats_handler: ListFormatsHandler,
            system_prompt_handler: SystemPromptHandler::new(composer),
            health_handler: HealthHandler::new(api_key_configured),
        }
    }
}
