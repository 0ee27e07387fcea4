use std::fs;
use std::io::ErrorKind;

use crate::config::ReleaseConfig;
use crate::error::Result;
use crate::patch::{PatchOutcome, stage};
use crate::version::major_version;

/// Appends the release's changes to the running notes for its major
/// version and writes the result under the full version's filename.
///
/// A missing major-version notes file means this is the first release of
/// a new major version; the notes start from the new changes alone.
pub fn patch_release_notes(
    config: &ReleaseConfig,
    version: &str,
    changes: &str,
    draft: bool,
) -> Result<PatchOutcome> {
    let major = major_version(version);
    let major_notes = config.release_notes_dir.join(format!("{major}.rst"));

    let existing = match fs::read_to_string(&major_notes) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };

    let target = config.release_notes_dir.join(format!("{version}.rst"));
    let patched = format!("{existing}{changes}").trim().to_string();

    stage(&target, &patched, draft)
}
