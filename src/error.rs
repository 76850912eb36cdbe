//! Error types.
//!
//! Each domain has its own enum; `Error` composes them so callers can
//! match on the kind of failure while the binary reports a single message.

use std::path::PathBuf;

use thiserror::Error;

/// Password validation and normalization failures.
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("password must be between 1 and 24 bytes long (got {0})")]
    InvalidLength(usize),

    #[error("password mismatch")]
    Mismatch,

    #[error("password produces a degenerate triple DES key (sub-keys collapse to single DES)")]
    DegenerateKey,
}

/// Block cipher failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("decryption failed: invalid password or corrupt data")]
    BadKeyOrData,

    #[error("ciphertext length {0} is not a positive multiple of 8")]
    InvalidCiphertextLength(usize),

    #[error("plaintext is not valid UTF-8")]
    InvalidPlaintext,

    #[error("key must be 16 or 24 bytes (got {0})")]
    InvalidKeyLength(usize),
}

/// `.cred.toml` failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Crate-wide error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the file being processed to an error.
    pub fn at(self, path: impl Into<PathBuf>) -> Self {
        Error::File {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The underlying error, with any file context removed.
    pub fn root(&self) -> &Error {
        match self {
            Error::File { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether this is a wrong-password outcome rather than an I/O failure.
    pub fn is_bad_key(&self) -> bool {
        matches!(self.root(), Error::Cipher(CipherError::BadKeyOrData))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
