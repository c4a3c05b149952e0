//! System Handlers
//!
//! 服务信息与健康检查

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetHealth;
use crate::infrastructure::http::dto::{EndpointsInfo, HealthResponse, ServiceInfoResponse};
use crate::infrastructure::http::state::AppState;

/// GET / - 服务信息
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: "Shaya Sussman Content Generator API",
        version: env!("CARGO_PKG_VERSION"),
        description: "AI-powered content generator in Rabbi Shaya Sussman's voice",
        endpoints: EndpointsInfo {
            generate: "POST /generate",
            formats: "GET /formats",
            voice_profile: "GET /voice-profile",
            system_prompt: "GET /system-prompt",
            health: "GET /health",
        },
    })
}

/// GET /health - 健康检查
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(state.health_handler.handle(GetHealth).into())
}
