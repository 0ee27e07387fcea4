use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while regenerating changelog artifacts
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{command}` exited with status {code}: {stderr}")]
    ExternalTool {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Marker `{marker}` not found in {path}")]
    MalformedDocument { path: PathBuf, marker: &'static str },

    #[error("Required input file is missing: {0}")]
    MissingInput(PathBuf),

    #[error("`{command}` did not print a version")]
    EmptyVersion { command: String },
}

impl ChangelogError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("File operation failed: {err}"),
            Self::ExternalTool {
                command,
                code,
                stderr,
            } => {
                let stderr = stderr.trim();
                if stderr.is_empty() {
                    format!("`{command}` failed with exit status {code}")
                } else {
                    format!("`{command}` failed with exit status {code}: {stderr}")
                }
            }
            Self::MalformedDocument { path, marker } => format!(
                "{} is malformed: expected a `{marker}` marker",
                path.display()
            ),
            Self::MissingInput(path) => format!("Required file not found: {}", path.display()),
            Self::EmptyVersion { command } => {
                format!("`{command}` did not print a version to stdout")
            }
        }
    }
}

/// Type alias for Result with ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;
