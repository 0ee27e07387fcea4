use std::path::PathBuf;

/// Layout and identity of the repository whose changelog artifacts are
/// regenerated.
///
/// Built once at startup and passed to each operation; paths are relative
/// to the repository root unless an absolute path is supplied.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Package name used in the Debian changelog stanza.
    pub package_name: String,
    /// Packager identity recorded in RPM and Debian changelog entries.
    pub packager: String,
    /// RPM spec file carrying the `%changelog` section.
    pub rpm_spec_path: PathBuf,
    /// Debian changelog file; must already exist.
    pub deb_changelog_path: PathBuf,
    /// Directory holding one release-notes file per version.
    pub release_notes_dir: PathBuf,
    /// Aggregated top-level changelog regenerated from fragments.
    pub changelog_md_path: PathBuf,
    /// Directory of change fragments consumed by the aggregator.
    pub fragments_dir: PathBuf,
    /// Command printing the current release version to stdout.
    pub version_command: Vec<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            package_name: "salt".to_string(),
            packager: "Salt Project Packaging <saltproject-packaging@vmware.com>".to_string(),
            rpm_spec_path: PathBuf::from("pkg/rpm/salt.spec"),
            deb_changelog_path: PathBuf::from("pkg/debian/changelog"),
            release_notes_dir: PathBuf::from("doc/topics/releases"),
            changelog_md_path: PathBuf::from("CHANGELOG.md"),
            fragments_dir: PathBuf::from("changelog/"),
            version_command: vec!["python3".to_string(), "salt/version.py".to_string()],
        }
    }
}
