//! Generate Handler

use axum::{extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use crate::application::GenerateContent;
use crate::infrastructure::http::dto::{GenerateRequest, GenerateResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 调用方凭证请求头
pub const API_KEY_HEADER: &str = "x-api-key";

/// POST /generate
///
/// 请求头 `X-API-Key` 优先于服务端默认凭证；`prompt_only` 时不需要凭证
pub async fn generate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let credential = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let cmd = GenerateContent {
        topic: req.topic,
        format: req.format,
        additional_context: req.additional_context.unwrap_or_default(),
        prompt_only: req.prompt_only,
        credential,
    };

    let result = state.generate_handler.handle(cmd).await?;

    Ok(Json(result.into()))
}
