//! Configuration file management.
//!
//! Reads the optional `.cred.toml` from the working directory. Every field
//! has a default, so a missing file is not an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants::{
    CONFIG_FILE, ENCRYPTED_SUFFIX, ENV_FILE, LOCAL_SUFFIX, PUBLIC_SUFFIX, SECRET_SUFFIX,
};
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.cred.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub cred: Settings,
}

/// The `[cred]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Name of the merged environment file.
    #[serde(default = "default_env_file")]
    pub env_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
        }
    }
}

fn default_env_file() -> String {
    ENV_FILE.to_string()
}

impl Config {
    /// Path of the configuration file inside `dir`.
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load `.cred.toml` from `dir`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// `ConfigError::Parse` if it is malformed, and `ConfigError::Invalid` if
    /// a value fails validation.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::config_path(dir);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        debug!(env_file = %config.cred.env_file, "config loaded");
        Ok(config)
    }

    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The env file must be a bare file name that cannot be mistaken for a
    /// source or encrypted file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        validate_env_file(&self.cred.env_file)
    }

    /// Path of the merged environment file inside `dir`.
    pub fn env_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.cred.env_file)
    }
}

/// Check that `name` is usable as the merged output file name.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if it is empty, contains a path
/// separator, or ends with a source or encrypted suffix.
pub fn validate_env_file(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ConfigError::Invalid("env_file cannot be empty".to_string()).into());
    }

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ConfigError::Invalid(format!(
            "env_file must be a file name, not a path: {}",
            name
        ))
        .into());
    }

    for suffix in [SECRET_SUFFIX, PUBLIC_SUFFIX, LOCAL_SUFFIX, ENCRYPTED_SUFFIX] {
        if name.ends_with(suffix) {
            return Err(ConfigError::Invalid(format!(
                "env_file cannot end with {} (it would overwrite or feed a source file)",
                suffix
            ))
            .into());
        }
    }

    Ok(())
}
