//! Regenerates changelog artifacts from structured change fragments.
//!
//! The pipeline drives an external aggregation tool (towncrier) plus
//! `git`, reshapes the aggregated text for each packaging format, and
//! patches the target documents through a scoped temporary file so a
//! draft run previews exactly the bytes a real run would write.

pub mod aggregator;
pub mod config;
pub mod debian;
pub mod error;
pub mod markdown;
pub mod notes;
pub mod patch;
pub mod rpm;
pub mod runner;
pub mod scratch;
pub mod strip;
pub mod version;

pub use aggregator::Aggregator;
pub use config::ReleaseConfig;
pub use debian::patch_debian_changelog;
pub use error::{ChangelogError, Result};
pub use markdown::regenerate_changelog_md;
pub use notes::patch_release_notes;
pub use patch::PatchOutcome;
pub use rpm::patch_rpm_spec;
pub use runner::{CommandOutput, CommandRunner, ShellRunner};
pub use strip::{package_changes, strip_title};
pub use version::{major_version, resolve_version};
