//! Generation Adapters - 生成后端实现

mod anthropic_client;
mod fake_client;
mod unavailable_client;

pub use anthropic_client::{AnthropicClient, AnthropicClientConfig};
pub use fake_client::FakeGenerationClient;
pub use unavailable_client::UnavailableGenerationClient;

use std::sync::Arc;

use crate::application::ports::{GenerationError, GenerationPort};
use crate::config::{GenerationConfig, GenerationProvider};

/// 按配置创建生成后端
pub fn create_generator(
    config: &GenerationConfig,
) -> Result<Arc<dyn GenerationPort>, GenerationError> {
    match config.provider {
        GenerationProvider::Anthropic => Ok(Arc::new(AnthropicClient::new(
            AnthropicClientConfig::from(config),
        )?)),
        GenerationProvider::Disabled => Ok(Arc::new(UnavailableGenerationClient::default())),
    }
}
