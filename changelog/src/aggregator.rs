use crate::error::Result;
use crate::runner::CommandRunner;

/// Adapter over the towncrier changelog-aggregation tool.
///
/// Draft mode renders a preview without consuming any fragments; build
/// mode lets towncrier rewrite its output files and mark the fragments
/// as consumed.
pub struct Aggregator<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> Aggregator<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Renders the aggregated changelog for `version` without touching
    /// any persisted aggregator state.
    pub fn draft(&self, version: &str) -> Result<String> {
        let version_arg = format!("--version={version}");
        let output = self
            .runner
            .run("towncrier", &["build", "--draft", &version_arg])?;
        Ok(output.stdout)
    }

    /// Builds the changelog for real, consuming fragments as a side
    /// effect external to this pipeline.
    pub fn build(&self, version: &str) -> Result<String> {
        let version_arg = format!("--version={version}");
        let output = self
            .runner
            .run("towncrier", &["build", &version_arg, "--yes"])?;
        Ok(output.stdout)
    }
}
