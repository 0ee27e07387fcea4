use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chlog")]
#[command(
    author,
    version,
    about = "Changelog tools that regenerate release artifacts from change fragments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Update the RPM spec file with a new changelog entry
    UpdateRpm {
        /// The package version. If not passed it will be discovered by
        /// running the configured version command.
        version: Option<String>,

        /// Do not make any changes, instead output what would be changed
        #[clap(long, default_value_t = false)]
        draft: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Update the Debian changelog with a new release stanza
    UpdateDeb {
        /// The package version. If not passed it will be discovered by
        /// running the configured version command.
        version: Option<String>,

        /// Do not make any changes, instead output what would be changed
        #[clap(long, default_value_t = false)]
        draft: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Update the release notes for the current major version
    UpdateReleaseNotes {
        /// The version used to generate the release notes. If not passed
        /// it will be discovered by running the configured version command.
        version: Option<String>,

        /// Do not make any changes, instead output what would be changed
        #[clap(long, default_value_t = false)]
        draft: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Regenerate CHANGELOG.md from the change fragments
    UpdateChangelogMd {
        /// The version to use in the changelog. If not passed it will be
        /// discovered by running the configured version command.
        version: Option<String>,

        /// Do not make any changes, instead output what would be changed
        #[clap(long, default_value_t = false)]
        draft: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },
}
