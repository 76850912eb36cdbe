//! Cred - encrypted, version-controlled credential files.
//!
//! Credential files (`*.secret`) are encrypted with a password into
//! `*.secret.enc` so they can be committed, decrypted back on checkout,
//! and merged with shareable (`*.public`) and machine-local (`*.local`)
//! variable files into a single `.env`.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # *.secret -> *.secret.enc
//! │   ├── decrypt       # *.secret.enc -> *.secret
//! │   ├── concat        # secret, public, local -> .env
//! │   ├── password      # Password flag/env/prompt
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── key           # Password -> 16/24-byte key
//!     ├── padding       # Space padding to block multiples
//!     ├── cipher/       # Triple DES ECB, buffer and file transforms
//!     ├── env           # key=value parsing and precedence merge
//!     ├── fs            # File discovery, atomic writes
//!     └── config        # .cred.toml
//! ```
//!
//! # Example
//!
//! ```
//! use cred::core::{cipher, key};
//!
//! let key = key::normalize(b"hunter2").unwrap();
//! let sealed = cipher::encrypt(b"API_KEY=abc", &key).unwrap();
//! assert_eq!(sealed.len(), 16);
//! assert_eq!(cipher::decrypt(&sealed, &key).unwrap(), b"API_KEY=abc");
//! ```

pub mod cli;
pub mod core;
pub mod error;
