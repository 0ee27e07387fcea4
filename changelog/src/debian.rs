use chrono::Utc;
use std::fs;

use crate::config::ReleaseConfig;
use crate::error::{ChangelogError, Result};
use crate::patch::{PatchOutcome, stage};

/// Turns aggregator bullets into Debian changelog entries: a leading `-`
/// becomes `*`, and every line is indented by two spaces.
fn format_entries(changes: &str) -> String {
    changes
        .split('\n')
        .map(|line| match line.strip_prefix('-') {
            Some(rest) => format!("  *{rest}"),
            None => format!("  {line}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prepends a new release stanza to the Debian changelog.
///
/// # Errors
///
/// Returns `MissingInput` when the changelog file does not exist; a
/// Debian changelog is never created from scratch here.
pub fn patch_debian_changelog(
    config: &ReleaseConfig,
    version: &str,
    changes: &str,
    draft: bool,
) -> Result<PatchOutcome> {
    let changelog_path = &config.deb_changelog_path;
    if !changelog_path.exists() {
        return Err(ChangelogError::MissingInput(changelog_path.clone()));
    }
    let existing = fs::read_to_string(changelog_path)?;

    let date = Utc::now().format("%a, %d %b %Y %H:%M:%S +0000");
    let mut patched = format!(
        "{package} ({version}) stable; urgency=medium\n\n",
        package = config.package_name
    );
    patched.push_str(&format_entries(changes));
    patched.push_str(&format!(
        "\n -- {packager} {date}\n\n",
        packager = config.packager
    ));
    patched.push_str(&existing);

    stage(changelog_path, &patched, draft)
}
