//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::config::CREDENTIAL_ENV_VAR;

/// 错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Internal(String),
    ServiceUnavailable(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                msg
            }
            ApiError::Unauthorized(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Missing credential");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Generation failed");
                msg
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Service unavailable");
                msg
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        let msg = e.to_string();
        match e {
            ApplicationError::EmptyTopic | ApplicationError::UnknownFormat(_) => {
                ApiError::BadRequest(msg)
            }
            ApplicationError::MissingCredential => ApiError::Unauthorized(format!(
                "{}. Pass via X-API-Key header or set {} environment variable.",
                msg, CREDENTIAL_ENV_VAR
            )),
            ApplicationError::ClientUnavailable(_) => ApiError::ServiceUnavailable(msg),
            ApplicationError::UpstreamFailure(_) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApplicationError::EmptyTopic, StatusCode::BAD_REQUEST),
            (
                ApplicationError::UnknownFormat("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (ApplicationError::MissingCredential, StatusCode::UNAUTHORIZED),
            (
                ApplicationError::ClientUnavailable("off".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ApplicationError::UpstreamFailure("HTTP 529".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }

    #[test]
    fn test_missing_credential_names_header() {
        match ApiError::from(ApplicationError::MissingCredential) {
            ApiError::Unauthorized(detail) => assert_eq!(
                detail,
                "API key required. Pass via X-API-Key header or set ANTHROPIC_API_KEY \
                 environment variable."
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
