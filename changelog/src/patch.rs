use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::scratch::ScratchFile;

/// Result of a patch operation against one target document.
#[derive(Debug)]
pub struct PatchOutcome {
    /// The document the patch targets.
    pub path: PathBuf,
    /// The full patched content, read back from the scratch file.
    pub content: String,
    /// Whether the target was actually replaced (false in draft mode).
    pub written: bool,
}

/// Stages `content` through the scoped scratch file and either promotes
/// it onto `target` or, in draft mode, discards it after reading it back.
pub(crate) fn stage(target: &Path, content: &str, draft: bool) -> Result<PatchOutcome> {
    let scratch = ScratchFile::create(target, content)?;
    let staged = scratch.read()?;

    let written = if draft {
        false
    } else {
        scratch.promote(target)?;
        true
    };

    Ok(PatchOutcome {
        path: target.to_path_buf(),
        content: staged,
        written,
    })
}
