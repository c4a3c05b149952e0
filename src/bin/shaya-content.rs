//! Shaya Content - 命令行入口
//!
//! 生成内容写到 stdout 或 --output 指定的文件，日志写到 stderr

use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use shaya_content::application::GenerateContentHandler;
use shaya_content::cli::{run, Cli, CliContext, CliError};
use shaya_content::config::{load_config, LogConfig};
use shaya_content::domain::{PromptComposer, VoiceProfile};
use shaya_content::infrastructure::create_generator;
use shaya_content::logging::{init_logging, LogTarget};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(
        &LogConfig {
            level: "warn".to_string(),
            json: config.log.json,
        },
        LogTarget::Stderr,
    );

    let profile = VoiceProfile::SHAYA_SUSSMAN;
    let ctx = CliContext {
        profile,
        handler: GenerateContentHandler::new(
            PromptComposer::new(profile),
            create_generator(&config.generation)?,
            config.generation.default_credential(),
        ),
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    match run(cli, &ctx, &mut input, &mut out).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err @ CliError::Usage(_)) => {
            Cli::command().print_help()?;
            println!("\nError: {}", err);
            Ok(err.exit_code())
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            Ok(err.exit_code())
        }
    }
}
