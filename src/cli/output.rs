//! 结果输出

use std::io::Write;
use std::path::Path;

use crate::domain::VoiceProfile;

/// 写入文件并提示路径，或直接打印
pub(crate) async fn emit<W: Write>(
    content: &str,
    path: Option<&Path>,
    out: &mut W,
) -> std::io::Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, content).await?;
            tracing::debug!(path = %path.display(), bytes = content.len(), "Output written");
            writeln!(out, "Content written to {}", path.display())
        }
        None => writeln!(out, "{}", content),
    }
}

/// --show-voice-profile
pub(crate) fn print_voice_profile<W: Write>(
    profile: &VoiceProfile,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "\n=== SHAYA SUSSMAN VOICE PROFILE ===\n")?;
    writeln!(out, "Name: {}", profile.name)?;
    for (label, text) in profile.sections() {
        writeln!(out, "\n{}:\n{}", label, text.trim())?;
    }
    Ok(())
}
