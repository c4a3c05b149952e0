//! Catalog Handlers
//!
//! 人设、格式与系统提示词（只读静态数据）

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetSystemPrompt, GetVoiceProfile, ListFormats};
use crate::infrastructure::http::dto::{
    FormatInfoResponse, SystemPromptResponse, VoiceProfileResponse,
};
use crate::infrastructure::http::state::AppState;

/// GET /voice-profile
pub async fn get_voice_profile(State(state): State<Arc<AppState>>) -> Json<VoiceProfileResponse> {
    Json(state.voice_profile_handler.handle(GetVoiceProfile).into())
}

/// GET /formats
pub async fn list_formats(State(state): State<Arc<AppState>>) -> Json<Vec<FormatInfoResponse>> {
    Json(
        state
            .list_formats_handler
            .handle(ListFormats)
            .into_iter()
            .map(FormatInfoResponse::from)
            .collect(),
    )
}

/// GET /system-prompt
pub async fn get_system_prompt(State(state): State<Arc<AppState>>) -> Json<SystemPromptResponse> {
    Json(SystemPromptResponse {
        system_prompt: state.system_prompt_handler.handle(GetSystemPrompt),
    })
}
