use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Temporary file that never survives its scope.
///
/// Patched content is staged here in full and read back from disk, so a
/// draft preview is byte-identical to what a real run would write. The
/// file is removed on every exit path: promotion, draft display, or
/// failure.
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Scratch path for `target`: `<target>.tmp` alongside it.
    #[must_use]
    pub fn path_for(target: &Path) -> PathBuf {
        let mut name = target
            .file_name()
            .map_or_else(|| "scratch".into(), OsStr::to_os_string);
        name.push(".tmp");
        target.with_file_name(name)
    }

    /// Stages `contents` at the scratch path for `target`.
    ///
    /// # Errors
    ///
    /// Returns an error when the scratch file cannot be written.
    pub fn create(target: &Path, contents: &str) -> Result<Self> {
        let path = Self::path_for(target);
        fs::write(&path, contents)?;
        Ok(Self { path })
    }

    /// Reads the staged contents back from disk.
    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Atomically replaces `target` with the staged contents.
    pub fn promote(self, target: &Path) -> Result<()> {
        fs::rename(&self.path, target)?;
        Ok(())
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
