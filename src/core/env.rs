//! Environment variable merging.
//!
//! Folds line-oriented `key=value` sources into one mapping. Later
//! sources overwrite values from earlier ones; output order is the order
//! in which each key was first seen.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, trace};

use crate::core::constants::{LOCAL_SUFFIX, PUBLIC_SUFFIX, SECRET_SUFFIX};
use crate::core::fs;
use crate::error::{Error, Result};

/// Precedence tier of a variable file.
///
/// Classes are merged in declaration order, so `Local` wins over
/// `Public`, which wins over `Secret`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceClass {
    Secret,
    Public,
    Local,
}

impl SourceClass {
    /// All classes in merge order.
    pub const ALL: [SourceClass; 3] = [SourceClass::Secret, SourceClass::Public, SourceClass::Local];

    /// File name suffix for this class.
    pub fn suffix(self) -> &'static str {
        match self {
            SourceClass::Secret => SECRET_SUFFIX,
            SourceClass::Public => PUBLIC_SUFFIX,
            SourceClass::Local => LOCAL_SUFFIX,
        }
    }
}

/// Insertion-ordered map of variable names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl VariableMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value.
    ///
    /// An existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `key=value` text and fold it into the mapping.
    ///
    /// Returns the number of assignments read.
    pub fn extend_from_str(&mut self, contents: &str) -> usize {
        let mut count = 0;
        for (key, value) in contents.lines().filter_map(parse_line) {
            if let Some(previous) = self.insert(key, value) {
                trace!(key, overwritten = previous != value, "key redefined");
            }
            count += 1;
        }
        count
    }

    /// Serialize as `key=value\n` lines in mapping order.
    pub fn to_env_string(&self) -> String {
        let mut output = String::new();
        for (key, value) in self.iter() {
            output.push_str(key);
            output.push('=');
            output.push_str(value);
            output.push('\n');
        }
        output
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

/// Parse one line into a trimmed `(key, value)` pair.
///
/// Blank lines, `#` comments and lines without `=` yield `None`. Only the
/// first `=` splits; values are taken verbatim (no quote handling).
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();

    // Skip empty lines and comments
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

/// Merge in-memory sources in order, later sources overriding earlier ones.
pub fn merge<'a>(sources: impl IntoIterator<Item = &'a str>) -> VariableMapping {
    let mut mapping = VariableMapping::new();
    for contents in sources {
        mapping.extend_from_str(contents);
    }
    mapping
}

/// Read `path` and fold its variables into `mapping`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read as UTF-8 text.
pub fn load_into(mapping: &mut VariableMapping, path: &Path) -> Result<usize> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::from(e).at(path))?;
    let count = mapping.extend_from_str(&contents);
    debug!(path = %path.display(), count, "read variables");
    Ok(count)
}

/// Write the mapping to `path`, replacing any previous file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn write_env_file(path: &Path, mapping: &VariableMapping) -> Result<()> {
    fs::write_atomic(path, mapping.to_env_string().as_bytes(), fs::PRIVATE_MODE)?;
    debug!(path = %path.display(), count = mapping.len(), "wrote env file");
    Ok(())
}
