//! Encrypt command.

use std::path::Path;

use tracing::info;

use crate::cli::{output, password};
use crate::core::cipher;
use crate::core::constants::SECRET_SUFFIX;
use crate::core::fs::find_files;
use crate::error::Result;

/// Encrypt every `*.secret` file in `dir` to `*.secret.enc`.
///
/// The password is validated before any file is touched. Stops at the
/// first file that fails.
pub fn execute(password: Option<String>, dir: &Path) -> Result<()> {
    let key = password::encryption_key(password)?;

    let files = find_files(dir, SECRET_SUFFIX)?;
    if files.is_empty() {
        output::warn(&format!("no *{} files found", SECRET_SUFFIX));
        return Ok(());
    }

    for input in &files {
        let out = cipher::encrypted_path(input);
        cipher::encrypt_file(input, &out, &key)?;
        output::success(&format!(
            "encrypted {} into {}",
            output::path(input.display()),
            output::path(out.display())
        ));
    }

    info!(count = files.len(), "encrypted files");
    Ok(())
}
