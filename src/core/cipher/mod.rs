//! Whole-buffer symmetric encryption.
//!
//! Credential files are encrypted with triple DES in ECB mode under a key
//! normalized from the user's password. The format is bare ciphertext:
//! no header, no IV, no authentication tag. Identical 8-byte plaintext
//! blocks produce identical ciphertext blocks; changing that would break
//! every file already committed.
//!
//! ## Wrong-password detection
//!
//! There is no MAC, so a wrong key is detected only because the
//! decrypted bytes usually fail UTF-8 decoding. That surfaces as
//! [`CipherError::BadKeyOrData`](crate::error::CipherError::BadKeyOrData).
//! It is best effort: a wrong key can, rarely, decode cleanly.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::ENCRYPTED_SUFFIX;
use crate::core::fs;
use crate::core::key::Key;
use crate::error::{Error, Result};

mod des;

pub use self::des::TripleDesEcb;

/// Symmetric whole-buffer cipher.
pub trait Cipher {
    /// Pad and encrypt UTF-8 plaintext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidPlaintext` if the input is not UTF-8.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt and strip padding.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::BadKeyOrData` when the result does not decode
    /// as UTF-8, `CipherError::InvalidCiphertextLength` when the input is
    /// not whole blocks.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt plaintext under `key`.
///
/// Convenience wrapper around [`TripleDesEcb::encrypt`].
pub fn encrypt(plaintext: &[u8], key: &Key) -> Result<Vec<u8>> {
    TripleDesEcb::new(key)?.encrypt(plaintext)
}

/// Decrypt ciphertext under `key`.
///
/// Convenience wrapper around [`TripleDesEcb::decrypt`].
pub fn decrypt(ciphertext: &[u8], key: &Key) -> Result<Vec<u8>> {
    TripleDesEcb::new(key)?.decrypt(ciphertext)
}

/// Path of the encrypted counterpart of `path` (`x.secret` → `x.secret.enc`).
pub fn encrypted_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(ENCRYPTED_SUFFIX);
    PathBuf::from(name)
}

/// Path of the decrypted counterpart of `path` (`x.secret.enc` → `x.secret`).
///
/// Returns `None` if `path` does not carry the encrypted suffix.
pub fn decrypted_path(path: &Path) -> Option<PathBuf> {
    let name = path.to_str()?;
    let stripped = name.strip_suffix(ENCRYPTED_SUFFIX)?;
    (!stripped.is_empty()).then(|| PathBuf::from(stripped))
}

/// Encrypt the file at `input` into `output`.
///
/// The whole file is read, encrypted in memory, then written atomically.
///
/// # Errors
///
/// Any failure is tagged with the path it concerns. On error `output` is
/// not created or modified.
pub fn encrypt_file(input: &Path, output: &Path, key: &Key) -> Result<()> {
    let plaintext = std::fs::read(input).map_err(|e| Error::from(e).at(input))?;
    let ciphertext = encrypt(&plaintext, key).map_err(|e| e.at(input))?;
    fs::write_atomic(output, &ciphertext, fs::SHARED_MODE).map_err(|e| e.at(output))?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        bytes = ciphertext.len(),
        "encrypted file"
    );
    Ok(())
}

/// Decrypt the file at `input` into `output`.
///
/// # Errors
///
/// A wrong password surfaces as `CipherError::BadKeyOrData` tagged with
/// `input`; in that case nothing is written.
pub fn decrypt_file(input: &Path, output: &Path, key: &Key) -> Result<()> {
    let ciphertext = std::fs::read(input).map_err(|e| Error::from(e).at(input))?;
    let plaintext = decrypt(&ciphertext, key).map_err(|e| e.at(input))?;
    fs::write_atomic(output, &plaintext, fs::PRIVATE_MODE).map_err(|e| e.at(output))?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        bytes = plaintext.len(),
        "decrypted file"
    );
    Ok(())
}
