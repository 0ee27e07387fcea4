use chrono::Utc;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::fs;

use crate::config::ReleaseConfig;
use crate::error::{ChangelogError, Result};
use crate::patch::{PatchOutcome, stage};

static VERSION_FIELD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)Version: .*").expect("Failed to compile version field regex"));

const CHANGELOG_MARKER: &str = "%changelog";

/// Rewrites the spec's `Version:` field and inserts a new dated entry
/// directly after the `%changelog` marker, keeping the existing history
/// below it.
///
/// # Errors
///
/// Returns `MissingInput` when the spec file does not exist and
/// `MalformedDocument` when it has no `%changelog` marker.
pub fn patch_rpm_spec(
    config: &ReleaseConfig,
    version: &str,
    changes: &str,
    draft: bool,
) -> Result<PatchOutcome> {
    let spec_path = &config.rpm_spec_path;
    if !spec_path.exists() {
        return Err(ChangelogError::MissingInput(spec_path.clone()));
    }

    let orig = fs::read_to_string(spec_path)?;
    let orig = VERSION_FIELD_PATTERN
        .replace_all(&orig, NoExpand(&format!("Version: {version}")))
        .into_owned();

    let Some((preamble, history)) = orig.split_once(CHANGELOG_MARKER) else {
        return Err(ChangelogError::MalformedDocument {
            path: spec_path.clone(),
            marker: CHANGELOG_MARKER,
        });
    };

    let date = Utc::now().format("%a %b %d %Y");
    let header = format!("* {date} {packager} - {version}\n", packager = config.packager);

    let mut patched = String::with_capacity(orig.len() + header.len() + changes.len() + 1);
    patched.push_str(preamble);
    patched.push_str(CHANGELOG_MARKER);
    patched.push('\n');
    patched.push_str(&header);
    patched.push_str(changes);
    patched.push_str(history);

    stage(spec_path, &patched, draft)
}
