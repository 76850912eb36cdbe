//! Password normalization.
//!
//! Turns a user password into a 16- or 24-byte triple DES key by
//! right-padding with spaces. There is no key derivation function; the
//! password bytes are the key.

use std::fmt;

use tracing::trace;
use zeroize::Zeroizing;

use crate::core::constants::{KEY_LEN_THREE, KEY_LEN_TWO};
use crate::core::padding::pad_bytes;
use crate::error::{PasswordError, Result};

/// A normalized cipher key, wiped from memory on drop.
///
/// Always exactly 16 or 24 bytes long.
#[derive(Clone)]
pub struct Key(Zeroizing<Vec<u8>>);

impl Key {
    /// Normalize a password into a key.
    ///
    /// - shorter than 16 bytes: padded to 16
    /// - 17 to 23 bytes: padded to 24
    /// - exactly 16 or 24 bytes: unchanged
    ///
    /// # Errors
    ///
    /// `PasswordError::InvalidLength` if the password is empty or longer
    /// than 24 bytes, `PasswordError::DegenerateKey` if the resulting key
    /// reduces triple DES to single DES.
    pub fn from_password(password: &[u8]) -> Result<Self> {
        let len = password.len();
        if len == 0 || len > KEY_LEN_THREE {
            return Err(PasswordError::InvalidLength(len).into());
        }

        let bytes = Zeroizing::new(if len < KEY_LEN_TWO {
            pad_bytes(password, KEY_LEN_TWO)
        } else if len > KEY_LEN_TWO && len < KEY_LEN_THREE {
            pad_bytes(password, KEY_LEN_THREE)
        } else {
            password.to_vec()
        });

        if is_degenerate(&bytes) {
            return Err(PasswordError::DegenerateKey.into());
        }

        trace!(password_len = len, key_len = bytes.len(), "normalized key");
        Ok(Self(bytes))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes (16 or 24).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a key is never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("len", &self.len()).finish()
    }
}

/// Normalize a password into a key.
///
/// Convenience wrapper around [`Key::from_password`].
pub fn normalize(password: &[u8]) -> Result<Key> {
    Key::from_password(password)
}

/// Whether the sub-keys of a triple DES key collapse it to single DES.
///
/// DES ignores the low bit of every key byte, so it is masked off before
/// comparing.
fn is_degenerate(key: &[u8]) -> bool {
    let same = |a: &[u8], b: &[u8]| a.iter().zip(b).all(|(x, y)| x & 0xfe == y & 0xfe);
    match key.len() {
        KEY_LEN_TWO => same(&key[..8], &key[8..]),
        KEY_LEN_THREE => same(&key[..8], &key[8..16]) || same(&key[8..16], &key[16..]),
        _ => false,
    }
}
