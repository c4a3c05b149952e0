//! Prompt Context - Value Objects

use crate::domain::{ContentFormat, DomainError};

/// 主题
///
/// 不变量: 去除首尾空白后非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    pub fn new(topic: impl Into<String>) -> Result<Self, DomainError> {
        let topic = topic.into();
        let trimmed = topic.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 单次生成请求
///
/// 每次调用构造，不持久化
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: Topic,
    format: ContentFormat,
    additional_context: String,
    prompt_only: bool,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, format: ContentFormat) -> Result<Self, DomainError> {
        Ok(Self {
            topic: Topic::new(topic)?,
            format,
            additional_context: String::new(),
            prompt_only: false,
        })
    }

    /// 从原始字符串构造，格式标识不在目录中时返回 `UnknownFormat`
    ///
    /// 主题先于格式校验
    pub fn parse(topic: &str, format: &str, additional_context: &str) -> Result<Self, DomainError> {
        let topic = Topic::new(topic)?;
        let format = format.parse::<ContentFormat>()?;
        Ok(Self {
            topic,
            format,
            additional_context: String::new(),
            prompt_only: false,
        }
        .with_context(additional_context))
    }

    /// 附加上下文，仅含空白时视为空
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.additional_context = context.into().trim().to_string();
        self
    }

    pub fn with_prompt_only(mut self, prompt_only: bool) -> Self {
        self.prompt_only = prompt_only;
        self
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn format(&self) -> ContentFormat {
        self.format
    }

    pub fn additional_context(&self) -> Option<&str> {
        if self.additional_context.is_empty() {
            None
        } else {
            Some(&self.additional_context)
        }
    }

    pub fn prompt_only(&self) -> bool {
        self.prompt_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_is_trimmed() {
        let topic = Topic::new("  Finding inner peace \n").unwrap();
        assert_eq!(topic.as_str(), "Finding inner peace");
    }

    #[test]
    fn test_empty_topic_rejected() {
        assert_eq!(Topic::new(""), Err(DomainError::EmptyTopic));
        assert_eq!(Topic::new(" \t\n"), Err(DomainError::EmptyTopic));
    }

    #[test]
    fn test_parse_checks_topic_before_format() {
        assert_eq!(
            GenerationRequest::parse("", "nope", ""),
            Err(DomainError::EmptyTopic)
        );
        assert_eq!(
            GenerationRequest::parse("Prayer", "nope", ""),
            Err(DomainError::UnknownFormat("nope".to_string()))
        );
    }

    #[test]
    fn test_whitespace_context_is_absent() {
        let request = GenerationRequest::new("Prayer", ContentFormat::Article)
            .unwrap()
            .with_context("   ");
        assert_eq!(request.additional_context(), None);

        let request = request.with_context(" For beginners ");
        assert_eq!(request.additional_context(), Some("For beginners"));
    }

    #[test]
    fn test_defaults() {
        let request = GenerationRequest::new("Prayer", ContentFormat::default()).unwrap();
        assert_eq!(request.format(), ContentFormat::Article);
        assert!(!request.prompt_only());
        assert!(request.with_prompt_only(true).prompt_only());
    }
}
