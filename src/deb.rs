use changelog::{
    Aggregator, ReleaseConfig, ShellRunner, package_changes, patch_debian_changelog,
    resolve_version,
};

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

    let aggregator = Aggregator::new(&runner);
    let changes = package_changes(&aggregator.draft(&version)?);
    if verbose {
        ui::info_message(&format!("Patching {}", config.deb_changelog_path.display()));
    }

    let outcome = patch_debian_changelog(config, &version, &changes, draft)?;
    if draft {
        ui::draft_output(&outcome.content);
    } else {
        ui::success_message(&format!("Updated {}", outcome.path.display()));
    }

    Ok(())
}
