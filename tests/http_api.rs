//! HTTP API 契约测试
//!
//! 在进程内驱动 Router，生成后端使用假客户端

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use shaya_content::config::CorsConfig;
use shaya_content::domain::VoiceProfile;
use shaya_content::infrastructure::adapters::{FakeGenerationClient, UnavailableGenerationClient};
use shaya_content::infrastructure::http::{build_router, AppState};

fn app(fake: Arc<FakeGenerationClient>, default_key: Option<&str>) -> Router {
    let state = AppState::new(
        VoiceProfile::SHAYA_SUSSMAN,
        fake,
        default_key.map(str::to_string),
    );
    build_router(Arc::new(state), &CorsConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_generate(body: Value, api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("X-API-Key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_health_reports_default_credential() {
    let fake = Arc::new(FakeGenerationClient::new("x"));

    let (status, body) = send(app(fake.clone(), None), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "api_key_configured": false}));

    let (_, body) = send(app(fake, Some("sk-env")), get("/health")).await;
    assert_eq!(body["api_key_configured"], true);
}

#[tokio::test]
async fn test_formats_lists_four_unique_entries() {
    let app = app(Arc::new(FakeGenerationClient::new("x")), None);
    let (status, body) = send(app, get("/formats")).await;
    assert_eq!(status, StatusCode::OK);

    let formats = body.as_array().unwrap();
    let names: Vec<&str> = formats.iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["article", "social_media", "class_outline", "short_reflection"]);

    for format in formats {
        assert!(!format["description"].as_str().unwrap().is_empty());
        let instructions = format["instructions"].as_str().unwrap();
        assert_eq!(instructions, instructions.trim());
    }
}

#[tokio::test]
async fn test_voice_profile_fields_are_trimmed() {
    let app = app(Arc::new(FakeGenerationClient::new("x")), None);
    let (status, body) = send(app, get("/voice-profile")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Rabbi Shaya Sussman");

    let fields = [
        "tone",
        "style_patterns",
        "themes",
        "influences",
        "hebrew_vocabulary",
        "transitions",
    ];
    for field in fields {
        let text = body[field].as_str().unwrap();
        assert!(!text.is_empty(), "{} is empty", field);
        assert_eq!(text, text.trim(), "{} is not trimmed", field);
    }
}

#[tokio::test]
async fn test_system_prompt() {
    let app = app(Arc::new(FakeGenerationClient::new("x")), None);
    let (status, body) = send(app, get("/system-prompt")).await;
    assert_eq!(status, StatusCode::OK);
    let prompt = body["system_prompt"].as_str().unwrap();
    assert!(prompt.contains("## CRITICAL STYLE GUIDELINES"));
    assert!(prompt.contains("### Hebrew Vocabulary"));
}

#[tokio::test]
async fn test_service_info() {
    let app = app(Arc::new(FakeGenerationClient::new("x")), None);
    let (status, body) = send(app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["generate"], "POST /generate");
}

#[tokio::test]
async fn test_prompt_only_without_credential_is_ok() {
    let fake = Arc::new(FakeGenerationClient::new("x"));
    let request = post_generate(
        json!({"topic": "Finding inner peace", "format": "short_reflection", "prompt_only": true}),
        None,
    );

    let (status, body) = send(app(fake.clone(), None), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["format"], "short_reflection");
    assert_eq!(body["topic"], "Finding inner peace");
    assert_eq!(body["prompt_only"], true);
    let content = body["content"].as_str().unwrap();
    assert!(content.contains("## FORMAT: Short Reflection/Daily Wisdom"));
    assert!(content.contains("Finding inner peace"));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_generate_without_credential_is_401() {
    let request = post_generate(json!({"topic": "Prayer"}), None);
    let app = app(Arc::new(FakeGenerationClient::new("x")), None);
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("X-API-Key"));
    assert!(detail.contains("ANTHROPIC_API_KEY"));
}

#[tokio::test]
async fn test_generate_with_header_credential() {
    let fake = Arc::new(FakeGenerationClient::new("Rebbe Nachman teaches..."));
    let request = post_generate(
        json!({"topic": "Prayer", "additional_context": "For teenagers"}),
        Some("sk-header"),
    );

    let (status, body) = send(app(fake.clone(), Some("sk-env")), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "content": "Rebbe Nachman teaches...",
            "format": "article",
            "topic": "Prayer",
            "prompt_only": false
        })
    );

    let calls = fake.calls();
    assert_eq!(calls[0].credential, "sk-header");
    assert!(calls[0].user_prompt.contains("**Additional Context/Notes**: For teenagers"));
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let fake = Arc::new(FakeGenerationClient::failing(Some(529), "Overloaded"));
    let request = post_generate(json!({"topic": "Prayer"}), Some("sk-header"));

    let (status, body) = send(app(fake, None), request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("Overloaded"));
}

#[tokio::test]
async fn test_disabled_backend_is_503() {
    let state = AppState::new(
        VoiceProfile::SHAYA_SUSSMAN,
        Arc::new(UnavailableGenerationClient::default()),
        Some("sk-env".to_string()),
    );
    let app = build_router(Arc::new(state), &CorsConfig::default());

    let (status, _) = send(app.clone(), post_generate(json!({"topic": "Prayer"}), None)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(
        app,
        post_generate(json!({"topic": "Prayer", "prompt_only": true}), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_topic_rejected() {
    let fake = Arc::new(FakeGenerationClient::new("x"));
    let request = post_generate(json!({"topic": "", "prompt_only": true}), None);

    let (status, body) = send(app(fake.clone(), None), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("Topic"));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_format_rejected() {
    let request = post_generate(
        json!({"topic": "Prayer", "format": "podcast", "prompt_only": true}),
        None,
    );
    let app = app(Arc::new(FakeGenerationClient::new("x")), None);
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("podcast"));
}

#[tokio::test]
async fn test_missing_topic_field_rejected() {
    let request = post_generate(json!({"format": "article"}), None);
    let app = app(Arc::new(FakeGenerationClient::new("x")), None);
    let (status, _) = send(app, request).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_topic_echoed_as_sent() {
    let request = post_generate(json!({"topic": "  Prayer  ", "prompt_only": true}), None);
    let app = app(Arc::new(FakeGenerationClient::new("x")), None);
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["topic"], "  Prayer  ");
    assert!(body["content"].as_str().unwrap().contains("**Topic**: Prayer\n"));
}
