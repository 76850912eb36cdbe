//! Filesystem helpers.
//!
//! File discovery by suffix and all-or-nothing writes.

use std::io::Write;
use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};
use tracing::debug;

use crate::error::{Error, Result};

/// Permissions for plaintext outputs (decrypted credentials, env file).
pub const PRIVATE_MODE: u32 = 0o600;

/// Permissions for encrypted outputs, which are meant to be committed.
pub const SHARED_MODE: u32 = 0o644;

/// Regular files in `dir` whose name ends with `suffix`, sorted by path.
///
/// Hidden files are not matched and directories are skipped.
///
/// # Errors
///
/// Returns an error if the pattern is invalid or a directory entry cannot be read.
pub fn find_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*{}",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(suffix)
    );
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut files = Vec::new();
    for entry in glob_with(&pattern, options)? {
        let path = entry.map_err(|e| Error::Io(e.into_error()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    debug!(pattern = %pattern, count = files.len(), "matched files");
    Ok(files)
}

/// Write `contents` to `path` atomically.
///
/// The bytes go to a temporary file in the same directory, which replaces
/// `path` only once fully written. On failure `path` is left untouched.
///
/// # Errors
///
/// Returns an I/O error if the temporary file cannot be created, written or
/// persisted.
pub fn write_atomic(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(contents)?;
    temp.flush()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
