//! Interactive Mode
//!
//! 依次询问主题、格式、附加上下文；没有可用凭证时自动退回仅提示词模式

use std::io::{BufRead, Write};

use super::args::Cli;
use super::output::emit;
use super::runner::{CliContext, CliError};
use crate::domain::{ContentFormat, FormatCatalog, GenerationRequest};

const RULE_WIDTH: usize = 60;

fn prompt_line<R: BufRead, W: Write>(
    label: &str,
    input: &mut R,
    out: &mut W,
) -> std::io::Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    // EOF 视为空输入
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub(crate) async fn run_session<R: BufRead, W: Write>(
    cli: &Cli,
    ctx: &CliContext,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    let banner = "=".repeat(RULE_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "\n{}", banner)?;
    writeln!(out, "  SHAYA SUSSMAN CONTENT GENERATOR")?;
    writeln!(out, "  Wisdom Through Words")?;
    writeln!(out, "{}\n", banner)?;

    writeln!(out, "What topic would you like to write about?")?;
    writeln!(
        out,
        "(Examples: 'Finding inner peace', 'Dealing with anxiety', 'The power of prayer')"
    )?;
    let topic = prompt_line("\nTopic: ", input, out)?;
    if topic.is_empty() {
        writeln!(out, "No topic provided. Exiting.")?;
        return Ok(());
    }

    writeln!(out, "\nChoose a content format:")?;
    for (i, entry) in FormatCatalog::entries().enumerate() {
        writeln!(out, "  {}. {}", i + 1, entry.label)?;
    }
    let choice = prompt_line("\nChoice (1-4): ", input, out)?;
    // 菜单是唯一保留默认回退的地方
    let format = match ContentFormat::from_menu_choice(&choice) {
        Some(format) => format,
        None => {
            tracing::debug!(choice = %choice, "Unrecognized format choice");
            writeln!(out, "Unrecognized choice, using {}.", ContentFormat::Article)?;
            ContentFormat::Article
        }
    };

    writeln!(out, "\nAny additional context or notes? (Press Enter to skip)")?;
    let context = prompt_line("Context: ", input, out)?;

    let credential = ctx.handler.resolve_credential(cli.api_key.as_deref());
    let prompt_only = cli.prompt_only || credential.is_none();

    writeln!(out, "\n{}", rule)?;

    if prompt_only && !cli.prompt_only {
        writeln!(out, "No ANTHROPIC_API_KEY found. Generating prompt template...\n")?;
    } else if !prompt_only {
        writeln!(out, "Generating content with Claude...\n")?;
    }

    let request = GenerationRequest::new(topic, format)?
        .with_context(context)
        .with_prompt_only(prompt_only);
    let result = ctx
        .handler
        .handle_request(request, credential.as_deref())
        .await?;

    emit(&result.content, cli.output.as_deref(), out).await?;

    if prompt_only {
        writeln!(out, "\n{}", rule)?;
        writeln!(
            out,
            "Copy the above prompt and use it with Claude or another AI assistant."
        )?;
    }

    writeln!(out, "\n{}\n", banner)?;
    Ok(())
}
