//! Generate Command Handlers

use std::sync::Arc;

use crate::application::commands::GenerateContent;
use crate::application::error::ApplicationError;
use crate::application::ports::{CompletionRequest, GenerationPort};
use crate::domain::{ContentFormat, GenerationRequest, PromptComposer};

/// 生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    pub content: String,
    pub format: ContentFormat,
    pub topic: String,
    pub prompt_only: bool,
}

/// GenerateContent Handler
///
/// 两种模式在调用生成后端之前的行为完全一致
pub struct GenerateContentHandler {
    composer: PromptComposer,
    generator: Arc<dyn GenerationPort>,
    default_credential: Option<String>,
}

impl GenerateContentHandler {
    pub fn new(
        composer: PromptComposer,
        generator: Arc<dyn GenerationPort>,
        default_credential: Option<String>,
    ) -> Self {
        Self {
            composer,
            generator,
            default_credential: default_credential.filter(|key| !key.trim().is_empty()),
        }
    }

    /// 是否配置了默认凭证
    pub fn has_default_credential(&self) -> bool {
        self.default_credential.is_some()
    }

    /// 凭证解析：调用方提供的优先，其次为默认凭证
    pub fn resolve_credential(&self, supplied: Option<&str>) -> Option<String> {
        supplied
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .or_else(|| self.default_credential.clone())
    }

    /// 响应中的 `topic` 原样回显调用方的输入，提示词使用 trim 后的主题
    pub async fn handle(
        &self,
        command: GenerateContent,
    ) -> Result<GeneratedContent, ApplicationError> {
        let request = GenerationRequest::parse(
            &command.topic,
            &command.format,
            &command.additional_context,
        )?
        .with_prompt_only(command.prompt_only);

        let mut result = self
            .handle_request(request, command.credential.as_deref())
            .await?;
        result.topic = command.topic;
        Ok(result)
    }

    pub async fn handle_request(
        &self,
        request: GenerationRequest,
        credential: Option<&str>,
    ) -> Result<GeneratedContent, ApplicationError> {
        tracing::debug!(
            format = %request.format(),
            topic_len = request.topic().as_str().len(),
            prompt_only = request.prompt_only(),
            "Composing prompt"
        );

        let content = if request.prompt_only() {
            self.composer.render_prompt_only(&request)
        } else {
            let credential = self
                .resolve_credential(credential)
                .ok_or(ApplicationError::MissingCredential)?;
            let prompt = self.composer.compose(&request);

            tracing::info!(
                backend = %self.generator.backend(),
                format = %request.format(),
                "Requesting generation"
            );

            self.generator
                .generate(CompletionRequest {
                    system_prompt: prompt.system,
                    user_prompt: prompt.user,
                    credential,
                })
                .await?
        };

        Ok(GeneratedContent {
            content,
            format: request.format(),
            topic: request.topic().to_string(),
            prompt_only: request.prompt_only(),
        })
    }
}
