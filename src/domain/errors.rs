//! Domain Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("Unknown format: {0} (expected one of: article, social_media, class_outline, short_reflection)")]
    UnknownFormat(String),
}
