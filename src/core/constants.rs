//! Constants used throughout cred.
//!
//! Centralizes file suffixes, sizes and other magic values.

/// Suffix of plaintext credential files (class A, secret).
pub const SECRET_SUFFIX: &str = ".secret";

/// Suffix of shareable plaintext variable files (class B, public).
pub const PUBLIC_SUFFIX: &str = ".public";

/// Suffix of machine-local variable files (class C, local).
pub const LOCAL_SUFFIX: &str = ".local";

/// Suffix appended to a credential file once encrypted.
pub const ENCRYPTED_SUFFIX: &str = ".enc";

/// Default merged environment file name.
pub const ENV_FILE: &str = ".env";

/// Optional configuration file name.
pub const CONFIG_FILE: &str = ".cred.toml";

/// Cipher block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Two-key triple DES key length.
pub const KEY_LEN_TWO: usize = 16;

/// Three-key triple DES key length.
pub const KEY_LEN_THREE: usize = 24;

/// Byte used to pad plaintext and passwords.
pub const PAD_BYTE: u8 = b' ';
