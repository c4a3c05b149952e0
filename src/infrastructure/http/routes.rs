//! HTTP Routes
//!
//! API Endpoints:
//! - /               GET   服务信息
//! - /health         GET   健康检查（是否配置了默认凭证）
//! - /voice-profile  GET   人设字段
//! - /formats        GET   四种格式及其说明
//! - /system-prompt  GET   系统提示词
//! - /generate       POST  生成内容或仅返回提示词

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .route("/voice-profile", get(handlers::get_voice_profile))
        .route("/formats", get(handlers::list_formats))
        .route("/system-prompt", get(handlers::get_system_prompt))
        .route("/generate", post(handlers::generate))
}
