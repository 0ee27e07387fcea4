use std::process::Command;

use crate::error::{ChangelogError, Result};

/// Captured output of a finished external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
}

/// Seam for external command execution so tests can substitute canned
/// results for the real tools.
pub trait CommandRunner {
    /// Runs `program` with `args`, blocking until it exits and capturing
    /// its output.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::ExternalTool` when the command exits
    /// non-zero, carrying the captured stderr for diagnostics.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs commands through `std::process::Command`.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;

        if !output.status.success() {
            return Err(ChangelogError::ExternalTool {
                command: render_command(program, args),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
