use changelog::{
    Aggregator, ReleaseConfig, ShellRunner, patch_release_notes, resolve_version, strip_title,
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
    // Release notes keep the category sections, only the title goes.
    let changes = strip_title(&aggregator.draft(&version)?);
    if verbose {
        ui::info_message(&format!(
            "Writing notes under {}",
            config.release_notes_dir.display()
        ));
    }

    let outcome = patch_release_notes(config, &version, &changes, draft)?;
    if draft {
        ui::draft_output(&outcome.content);
    } else {
        ui::success_message(&format!("Updated {}", outcome.path.display()));
    }

    Ok(())
}
