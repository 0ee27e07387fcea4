use crate::aggregator::Aggregator;
use crate::config::ReleaseConfig;
use crate::error::Result;
use crate::runner::CommandRunner;

/// Regenerates the top-level changelog through the aggregator.
///
/// Draft mode only renders a preview. A real build lets the aggregator
/// rewrite its output files, then unstages the regenerated changelog and
/// the consumed fragments so they remain plain working-tree changes.
pub fn regenerate_changelog_md<R: CommandRunner>(
    runner: &R,
    config: &ReleaseConfig,
    version: &str,
    draft: bool,
) -> Result<String> {
    let aggregator = Aggregator::new(runner);
    if draft {
        return aggregator.draft(version);
    }

    let output = aggregator.build(version)?;

    let changelog_md = config.changelog_md_path.to_string_lossy();
    let fragments = config.fragments_dir.to_string_lossy();
    runner.run("git", &["restore", "--staged", &changelog_md, &fragments])?;

    Ok(output)
}
