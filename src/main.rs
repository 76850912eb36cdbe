//! Cred - load encrypted version-controlled credentials into the environment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cred::cli::output;
use cred::cli::{execute, Cli};
use cred::error::{CipherError, ConfigError, Error, PasswordError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("CRED_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cred=debug")
        } else {
            EnvFilter::new("cred=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match e.root() {
            Error::Cipher(CipherError::BadKeyOrData) => {
                Some("invalid password; no output was written for this file")
            }
            Error::Cipher(CipherError::InvalidPlaintext) => {
                Some("credential files must be UTF-8 text")
            }
            Error::Password(PasswordError::InvalidLength(_)) => {
                Some("use a password between 1 and 24 bytes long")
            }
            Error::Password(PasswordError::DegenerateKey) => {
                Some("use a password whose 8-byte halves differ")
            }
            Error::Config(ConfigError::Parse(_)) | Error::Config(ConfigError::Invalid(_)) => {
                Some("check .cred.toml")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
