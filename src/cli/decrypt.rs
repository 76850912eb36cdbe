//! Decrypt command.

use std::path::Path;

use tracing::info;

use crate::cli::{output, password};
use crate::core::cipher;
use crate::core::constants::{ENCRYPTED_SUFFIX, SECRET_SUFFIX};
use crate::core::fs::find_files;
use crate::error::Result;

/// Decrypt every `*.secret.enc` file in `dir` to `*.secret`.
///
/// Fail-fast: a wrong password stops the run at that file and nothing is
/// written for it. Files decrypted before it are kept.
pub fn execute(password: Option<String>, dir: &Path) -> Result<()> {
    let key = password::decryption_key(password)?;

    let suffix = format!("{}{}", SECRET_SUFFIX, ENCRYPTED_SUFFIX);
    let files = find_files(dir, &suffix)?;
    if files.is_empty() {
        output::warn(&format!("no *{} files found", suffix));
        return Ok(());
    }

    for input in &files {
        // find_files only returns names ending in the suffix
        let Some(out) = cipher::decrypted_path(input) else {
            continue;
        };
        cipher::decrypt_file(input, &out, &key)?;
        output::success(&format!(
            "decrypted {} into {}",
            output::path(input.display()),
            output::path(out.display())
        ));
    }

    info!(count = files.len(), "decrypted files");
    Ok(())
}
