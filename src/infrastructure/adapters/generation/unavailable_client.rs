//! Unavailable Client - 未接入生成后端时的桩实现
//!
//! 所有模型调用返回 ClientUnavailable，仅提示词模式可用

use async_trait::async_trait;

use crate::application::ports::{CompletionRequest, GenerationError, GenerationPort};

pub struct UnavailableGenerationClient {
    reason: String,
}

impl UnavailableGenerationClient {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableGenerationClient {
    fn default() -> Self {
        Self::new("generation backend is disabled; use prompt-only mode")
    }
}

#[async_trait]
impl GenerationPort for UnavailableGenerationClient {
    async fn generate(&self, _request: CompletionRequest) -> Result<String, GenerationError> {
        Err(GenerationError::ClientUnavailable(self.reason.clone()))
    }

    fn backend(&self) -> &str {
        "unavailable"
    }
}
