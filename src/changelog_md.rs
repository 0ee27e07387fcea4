use changelog::{ReleaseConfig, ShellRunner, regenerate_changelog_md, resolve_version};

use crate::error::Result;
use crate::ui;

pub fn execute(
    config: &ReleaseConfig,
    version: Option<String>,
    draft: bool,
    verbose: bool,
) -> Result<()> {
    let runner = ShellRunner;
    let version = match version {
        Some(version) => version,
        None => resolve_version(&runner, config)?,
    };
    ui::info_message(&format!("{} version is {version}", config.package_name));

    let output = regenerate_changelog_md(&runner, config, &version, draft)?;
    if draft {
        ui::draft_output(&output);
    } else {
        if verbose && !output.is_empty() {
            ui::draft_output(&output);
        }
        ui::success_message(&format!(
            "Regenerated {}",
            config.changelog_md_path.display()
        ));
    }

    Ok(())
}
