//! Anthropic Client - 调用 Anthropic Messages API
//!
//! 实现 GenerationPort trait，每次调用只发一次请求，不重试
//!
//! 外部 API:
//! POST {base_url}/v1/messages
//! Headers: x-api-key, anthropic-version
//! Request: {"model": "...", "max_tokens": 2000, "system": "...", "messages": [{"role": "user", "content": "..."}]}
//! Response: {"content": [{"type": "text", "text": "..."}, ...]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionRequest, GenerationError, GenerationPort};
use crate::config::GenerationConfig;

/// Messages API 请求体
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Anthropic 客户端配置
#[derive(Debug, Clone)]
pub struct AnthropicClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 模型标识
    pub model: String,
    /// 最大输出 token 数
    pub max_tokens: u32,
    /// anthropic-version 请求头
    pub api_version: String,
}

impl Default for AnthropicClientConfig {
    fn default() -> Self {
        Self::from(&GenerationConfig::default())
    }
}

impl From<&GenerationConfig> for AnthropicClientConfig {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            api_version: config.api_version.clone(),
        }
    }
}

impl AnthropicClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Anthropic Messages API 客户端
///
/// 不设置超时，沿用 reqwest 默认行为
pub struct AnthropicClient {
    client: Client,
    config: AnthropicClientConfig,
}

impl AnthropicClient {
    /// 创建新的客户端
    pub fn new(config: AnthropicClientConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .build()
            .map_err(|e| GenerationError::ClientUnavailable(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取 messages 接口 URL
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GenerationPort for AnthropicClient {
    async fn generate(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        if request.credential.trim().is_empty() {
            return Err(GenerationError::MissingCredential);
        }

        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system: &request.system_prompt,
            messages: [Message {
                role: "user",
                content: &request.user_prompt,
            }],
        };

        tracing::debug!(
            url = %self.messages_url(),
            model = %self.config.model,
            system_len = request.system_prompt.len(),
            user_len = request.user_prompt.len(),
            "Sending messages request"
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", request.credential.trim())
            .header("anthropic-version", &self.config.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GenerationError::upstream(format!("Cannot connect to generation API: {}", e))
                } else {
                    GenerationError::upstream(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(error_text);
            tracing::warn!(status = %status.as_u16(), "Generation API returned an error");
            return Err(GenerationError::Upstream {
                status: Some(status.as_u16()),
                message,
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::upstream(format!("Invalid response: {}", e)))?;

        let text = parsed
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| GenerationError::upstream("Response contained no text content"))?;

        tracing::info!(
            model = %self.config.model,
            content_len = text.len(),
            "Generation completed"
        );

        Ok(text)
    }

    fn backend(&self) -> &str {
        &self.config.model
    }
}
