//! CLI Runner
//!
//! 参数已由 clap 解析，这里负责分派与错误分类

use std::io::{BufRead, Write};
use std::process::ExitCode;
use thiserror::Error;

use super::args::Cli;
use super::interactive;
use super::output::{emit, print_voice_profile};
use crate::application::{ApplicationError, GenerateContentHandler};
use crate::config::CREDENTIAL_ENV_VAR;
use crate::domain::{DomainError, GenerationRequest, VoiceProfile};

/// CLI 错误
#[derive(Debug, Error)]
pub enum CliError {
    /// 参数问题，打印帮助并以 1 退出
    #[error("{0}")]
    Usage(String),

    #[error("{}", application_message(.0))]
    Application(#[from] ApplicationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 缺少凭证时提示命令行自己的参数
fn application_message(err: &ApplicationError) -> String {
    match err {
        ApplicationError::MissingCredential => format!(
            "{}. Set {} environment variable or pass --api-key",
            err, CREDENTIAL_ENV_VAR
        ),
        other => other.to_string(),
    }
}

impl CliError {
    /// 只有参数错误与本地 I/O 失败返回非零
    pub fn exit_status(&self) -> u8 {
        match self {
            CliError::Usage(_) | CliError::Io(_) => 1,
            CliError::Application(_) => 0,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyTopic => CliError::Usage("Topic must not be empty".to_string()),
            other => CliError::Application(other.into()),
        }
    }
}

/// 运行所需的依赖
pub struct CliContext {
    pub profile: VoiceProfile,
    pub handler: GenerateContentHandler,
}

/// 执行一次 CLI 调用
pub async fn run<R: BufRead, W: Write>(
    cli: Cli,
    ctx: &CliContext,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    if cli.show_voice_profile {
        print_voice_profile(&ctx.profile, out)?;
        return Ok(());
    }

    if cli.interactive {
        return interactive::run_session(&cli, ctx, input, out).await;
    }

    let topic = cli.topic.as_deref().ok_or_else(|| {
        CliError::Usage("Please provide a topic or use --interactive mode".to_string())
    })?;

    let request = GenerationRequest::new(topic, cli.format.into())?
        .with_context(cli.context.as_str())
        .with_prompt_only(cli.prompt_only);

    let result = ctx
        .handler
        .handle_request(request, cli.api_key.as_deref())
        .await?;

    emit(&result.content, cli.output.as_deref(), out).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PromptComposer;
    use crate::infrastructure::adapters::FakeGenerationClient;
    use clap::Parser;
    use std::sync::Arc;

    fn context(fake: Arc<FakeGenerationClient>, default_key: Option<&str>) -> CliContext {
        CliContext {
            profile: VoiceProfile::SHAYA_SUSSMAN,
            handler: GenerateContentHandler::new(
                PromptComposer::default(),
                fake,
                default_key.map(str::to_string),
            ),
        }
    }

    async fn run_args(args: &[&str], ctx: &CliContext) -> (Result<(), CliError>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut input: &[u8] = b"";
        let mut out = Vec::new();
        let result = run(cli, ctx, &mut input, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_missing_topic_is_usage_error() {
        let ctx = context(Arc::new(FakeGenerationClient::new("x")), None);
        let (result, _) = run_args(&["shaya-content"], &ctx).await;
        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(err.exit_status(), 1);
    }

    #[tokio::test]
    async fn test_blank_topic_is_usage_error() {
        let ctx = context(Arc::new(FakeGenerationClient::new("x")), None);
        let (result, _) = run_args(&["shaya-content", "   "], &ctx).await;
        assert!(matches!(result, Err(CliError::Usage(_))));
    }

    #[tokio::test]
    async fn test_show_voice_profile_short_circuits() {
        let fake = Arc::new(FakeGenerationClient::new("x"));
        let ctx = context(fake.clone(), Some("key"));
        let (result, printed) =
            run_args(&["shaya-content", "Prayer", "--show-voice-profile"], &ctx).await;
        assert!(result.is_ok());
        assert!(printed.contains("VOICE PROFILE"));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_prompt_only_prints_prompt() {
        let ctx = context(Arc::new(FakeGenerationClient::new("x")), None);
        let (result, printed) = run_args(
            &["shaya-content", "Finding inner peace", "-p", "-f", "short_reflection"],
            &ctx,
        )
        .await;
        assert!(result.is_ok());
        assert!(printed.starts_with("=== SYSTEM INSTRUCTIONS ==="));
        assert!(printed.contains("## FORMAT: Short Reflection/Daily Wisdom"));
        assert!(printed.contains("**Topic**: Finding inner peace"));
    }

    #[tokio::test]
    async fn test_api_key_flag_is_forwarded() {
        let fake = Arc::new(FakeGenerationClient::new("Generated reflection"));
        let ctx = context(fake.clone(), None);
        let (result, printed) = run_args(
            &["shaya-content", "Prayer", "--api-key", "sk-flag", "-c", "Short and warm"],
            &ctx,
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(printed, "Generated reflection\n");

        let calls = fake.calls();
        assert_eq!(calls[0].credential, "sk-flag");
        assert!(calls[0].user_prompt.contains("**Additional Context/Notes**: Short and warm"));
    }

    #[tokio::test]
    async fn test_missing_credential_is_not_a_usage_error() {
        let ctx = context(Arc::new(FakeGenerationClient::new("x")), None);
        let (result, printed) = run_args(&["shaya-content", "Prayer"], &ctx).await;
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CliError::Application(ApplicationError::MissingCredential)
        ));
        assert_eq!(err.exit_status(), 0);
        assert_eq!(
            err.to_string(),
            "API key required. Set ANTHROPIC_API_KEY environment variable or pass --api-key"
        );
        assert!(!err.to_string().contains("X-API-Key"));
        assert!(printed.is_empty());
    }
}
