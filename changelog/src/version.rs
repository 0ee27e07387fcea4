use crate::config::ReleaseConfig;
use crate::error::{ChangelogError, Result};
use crate::runner::CommandRunner;

/// Discovers the current release version by running the configured
/// version command and trimming its stdout.
///
/// # Errors
///
/// Returns `ChangelogError::EmptyVersion` when the command is empty or
/// prints nothing, and `ChangelogError::ExternalTool` when it exits
/// non-zero.
pub fn resolve_version<R: CommandRunner>(runner: &R, config: &ReleaseConfig) -> Result<String> {
    let command = config.version_command.join(" ");

    let Some((program, args)) = config.version_command.split_first() else {
        return Err(ChangelogError::EmptyVersion { command });
    };
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = runner.run(program, &args)?;
    let version = output.stdout.trim().to_string();

    if version.is_empty() {
        return Err(ChangelogError::EmptyVersion { command });
    }

    Ok(version)
}

/// Returns the release version with any build metadata (the part after
/// the first `+`) removed.
#[must_use]
pub fn major_version(version: &str) -> &str {
    version
        .split_once('+')
        .map_or(version, |(major, _)| major)
}
