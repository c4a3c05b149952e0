//! Fake Generation Client - 用于测试的生成客户端
//!
//! 返回固定文本并记录每次调用，不发起网络请求

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{CompletionRequest, GenerationError, GenerationPort};

pub struct FakeGenerationClient {
    response: Result<String, (Option<u16>, String)>,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl FakeGenerationClient {
    /// 始终返回 `response`
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 始终返回上游错误
    pub fn failing(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            response: Err((status, message.into())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的请求
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerationPort for FakeGenerationClient {
    async fn generate(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        tracing::debug!(
            user_len = request.user_prompt.len(),
            "FakeGenerationClient: returning fixed response"
        );

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }

        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(GenerationError::Upstream {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn backend(&self) -> &str {
        "fake"
    }
}
