//! Password input.
//!
//! A password comes from `--password` / `CRED_PASSWORD` when given, otherwise
//! from the first line of piped stdin, otherwise from a hidden interactive
//! prompt.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::key::{normalize, Key};
use crate::error::{PasswordError, Result};

/// Resolve the key for encryption.
///
/// Without an explicit password the user is prompted twice; differing
/// entries fail with `PasswordError::Mismatch` rather than re-prompting.
pub fn encryption_key(explicit: Option<String>) -> Result<Key> {
    let password = match explicit {
        Some(p) => Zeroizing::new(p),
        None if !io::stdin().is_terminal() => read_piped()?,
        None => {
            println!("Enter encryption password (1 to 24 bytes)");
            let first = prompt("Password")?;
            let second = prompt("Confirm password")?;
            confirm(&first, &second)?;
            first
        }
    };
    normalize(password.as_bytes())
}

/// Resolve the key for decryption. Prompts once.
pub fn decryption_key(explicit: Option<String>) -> Result<Key> {
    let password = match explicit {
        Some(p) => Zeroizing::new(p),
        None if !io::stdin().is_terminal() => read_piped()?,
        None => prompt("Decryption password")?,
    };
    normalize(password.as_bytes())
}

/// Check that a password and its confirmation match.
pub fn confirm(first: &str, second: &str) -> Result<()> {
    if first != second {
        return Err(PasswordError::Mismatch.into());
    }
    Ok(())
}

/// Read the password from the first line of piped stdin.
fn read_piped() -> Result<Zeroizing<String>> {
    debug!("reading password from stdin");
    let mut line = Zeroizing::new(String::new());
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Zeroizing::new(trimmed.to_string()))
}

fn prompt(label: &str) -> Result<Zeroizing<String>> {
    debug!(label, "prompting for password");
    let value = Password::new()
        .with_prompt(label)
        .allow_empty_password(true)
        .interact()?;
    Ok(Zeroizing::new(value))
}
