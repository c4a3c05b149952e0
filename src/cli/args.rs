//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::domain::ContentFormat;

const EXAMPLES: &str = r#"Examples:
  shaya-content "Finding inner peace through prayer"
  shaya-content "Dealing with anxiety" --format social_media
  shaya-content "The power of Tehillim" --format class_outline --context "For a beginner audience"
  shaya-content --interactive
  shaya-content --prompt-only "Resilience in hard times""#;

#[derive(Parser, Debug)]
#[command(name = "shaya-content")]
#[command(about = "Generate content in the voice of Rabbi Shaya Sussman")]
#[command(after_help = EXAMPLES)]
#[command(version)]
pub struct Cli {
    /// The topic to write about
    pub topic: Option<String>,

    /// Content format
    #[arg(short = 'f', long, value_enum, default_value_t = FormatArg::Article)]
    pub format: FormatArg,

    /// Additional context or notes for the content
    #[arg(short = 'c', long, default_value = "")]
    pub context: String,

    /// Anthropic API key (or set ANTHROPIC_API_KEY env var)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Output the prompt template instead of generating content
    #[arg(short = 'p', long)]
    pub prompt_only: bool,

    /// Run in interactive mode
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Output file path (default: print to stdout)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Display the voice profile analysis
    #[arg(long)]
    pub show_voice_profile: bool,
}

/// `--format` 取值
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "snake_case")]
pub enum FormatArg {
    Article,
    SocialMedia,
    ClassOutline,
    ShortReflection,
}

impl From<FormatArg> for ContentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Article => ContentFormat::Article,
            FormatArg::SocialMedia => ContentFormat::SocialMedia,
            FormatArg::ClassOutline => ContentFormat::ClassOutline,
            FormatArg::ShortReflection => ContentFormat::ShortReflection,
        }
    }
}
