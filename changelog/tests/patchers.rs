use std::fs;
use std::path::Path;

use chrono::Utc;
use tempfile::TempDir;

use changelog::{
    ChangelogError, ReleaseConfig, patch_debian_changelog, patch_release_notes, patch_rpm_spec,
};

const SPEC: &str = "\
Name: salt
Version: 3005.1
Release: 0
Summary: A parallel remote execution system

%description
Salt minion and master.

%changelog
* Tue Jan 10 2023 Salt Project Packaging <saltproject-packaging@vmware.com> - 3005.1
- Old fix
";

const DEB_CHANGELOG: &str = "\
salt (3005.1) stable; urgency=medium

  * Old fix

 -- Salt Project Packaging <saltproject-packaging@vmware.com> Tue, 10 Jan 2023 00:00:00 +0000

";

fn test_config(root: &Path) -> ReleaseConfig {
    ReleaseConfig {
        rpm_spec_path: root.join("salt.spec"),
        deb_changelog_path: root.join("changelog"),
        release_notes_dir: root.join("releases"),
        ..ReleaseConfig::default()
    }
}

fn assert_no_scratch_files(dir: &Path) {
    for entry in fs::read_dir(dir).unwrap() {
        let name = entry.unwrap().file_name();
        assert!(
            !name.to_string_lossy().ends_with(".tmp"),
            "scratch file survived the run: {name:?}"
        );
    }
}

#[test]
fn rpm_patch_updates_version_and_inserts_entry() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    fs::write(&config.rpm_spec_path, SPEC).unwrap();

    let outcome = patch_rpm_spec(&config, "3006.0", "- New feature\n", false).unwrap();

    assert!(outcome.written);
    let patched = fs::read_to_string(&config.rpm_spec_path).unwrap();
    assert_eq!(patched, outcome.content);
    assert!(patched.contains("Version: 3006.0"));
    assert!(!patched.contains("Version: 3005.1"));

    let date = Utc::now().format("%a %b %d %Y");
    let header = format!(
        "%changelog\n* {date} {} - 3006.0\n- New feature\n",
        config.packager
    );
    assert!(
        patched.contains(&header),
        "missing new entry header in {patched:?}"
    );

    // The historical entries stay below the new one.
    let new_entry = patched.find("- New feature").unwrap();
    let old_entry = patched.find("- Old fix").unwrap();
    assert!(new_entry < old_entry);
    assert_no_scratch_files(dir.path());
}

#[test]
fn rpm_draft_is_byte_identical_to_a_real_run() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    fs::write(&config.rpm_spec_path, SPEC).unwrap();

    let draft = patch_rpm_spec(&config, "3006.0", "- New feature\n", true).unwrap();
    assert!(!draft.written);
    assert_eq!(fs::read_to_string(&config.rpm_spec_path).unwrap(), SPEC);

    let real = patch_rpm_spec(&config, "3006.0", "- New feature\n", false).unwrap();
    assert_eq!(draft.content, real.content);
    assert_eq!(
        fs::read_to_string(&config.rpm_spec_path).unwrap(),
        draft.content
    );
    assert_no_scratch_files(dir.path());
}

#[test]
fn rpm_spec_without_changelog_marker_is_malformed() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    fs::write(&config.rpm_spec_path, "Name: salt\nVersion: 3005.1\n").unwrap();

    let err = patch_rpm_spec(&config, "3006.0", "- New feature\n", false).unwrap_err();

    assert!(matches!(err, ChangelogError::MalformedDocument { .. }));
    assert_no_scratch_files(dir.path());
}

#[test]
fn rpm_missing_spec_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());

    let err = patch_rpm_spec(&config, "3006.0", "- New feature\n", false).unwrap_err();
    assert!(matches!(err, ChangelogError::MissingInput(_)));
}

#[test]
fn deb_patch_prepends_a_release_stanza() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    fs::write(&config.deb_changelog_path, DEB_CHANGELOG).unwrap();

    let outcome =
        patch_debian_changelog(&config, "3006.0", "- Fixed a bug\n- Added a thing\n", false)
            .unwrap();

    let patched = fs::read_to_string(&config.deb_changelog_path).unwrap();
    assert_eq!(patched, outcome.content);
    assert!(patched.starts_with("salt (3006.0) stable; urgency=medium\n\n  * Fixed a bug\n  * Added a thing\n"));
    assert!(patched.contains(" -- Salt Project Packaging"));
    assert!(patched.ends_with(DEB_CHANGELOG));
    assert_no_scratch_files(dir.path());
}

#[test]
fn deb_draft_leaves_the_changelog_untouched() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    fs::write(&config.deb_changelog_path, DEB_CHANGELOG).unwrap();

    let outcome = patch_debian_changelog(&config, "3006.0", "- Fixed a bug\n", true).unwrap();

    assert!(!outcome.written);
    assert_eq!(
        fs::read_to_string(&config.deb_changelog_path).unwrap(),
        DEB_CHANGELOG
    );
    assert_no_scratch_files(dir.path());
}

#[test]
fn deb_missing_changelog_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());

    let err = patch_debian_changelog(&config, "3006.0", "- Fixed a bug\n", false).unwrap_err();
    assert!(matches!(err, ChangelogError::MissingInput(_)));
}

#[test]
fn notes_for_a_new_major_version_use_the_full_version_filename() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    fs::create_dir_all(&config.release_notes_dir).unwrap();

    let outcome =
        patch_release_notes(&config, "3006.0+1", "\nSome changes\n\n- One fix (#1)\n", false)
            .unwrap();

    let target = config.release_notes_dir.join("3006.0+1.rst");
    assert_eq!(outcome.path, target);
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "Some changes\n\n- One fix (#1)"
    );
    assert!(!config.release_notes_dir.join("3006.0.rst").exists());
    assert_no_scratch_files(&config.release_notes_dir);
}

#[test]
fn notes_append_to_the_existing_major_version_file() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    fs::create_dir_all(&config.release_notes_dir).unwrap();
    fs::write(
        config.release_notes_dir.join("3006.0.rst"),
        "Existing notes\n",
    )
    .unwrap();

    let outcome = patch_release_notes(&config, "3006.0+2", "New changes\n", false).unwrap();

    assert_eq!(outcome.content, "Existing notes\nNew changes");
    assert_eq!(
        fs::read_to_string(config.release_notes_dir.join("3006.0+2.rst")).unwrap(),
        "Existing notes\nNew changes"
    );
    // The running major-version file itself is left alone.
    assert_eq!(
        fs::read_to_string(config.release_notes_dir.join("3006.0.rst")).unwrap(),
        "Existing notes\n"
    );
    assert_no_scratch_files(&config.release_notes_dir);
}

#[test]
fn notes_draft_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    fs::create_dir_all(&config.release_notes_dir).unwrap();

    let outcome = patch_release_notes(&config, "3006.0", "Some changes\n", true).unwrap();

    assert!(!outcome.written);
    assert_eq!(outcome.content, "Some changes");
    assert!(!config.release_notes_dir.join("3006.0.rst").exists());
    assert_no_scratch_files(&config.release_notes_dir);
}
