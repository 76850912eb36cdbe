//! Test support utilities for cred integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment pre-populated with files.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (name, contents) in files {
            t.write(name, contents);
        }
        t
    }

    /// Absolute path of a file in the project directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file in the project directory.
    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.path(name), contents).expect("failed to write test file");
    }

    /// Read a file in the project directory as text.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("failed to read test file")
    }

    /// Read a file in the project directory as bytes.
    pub fn read_bytes(&self, name: &str) -> Vec<u8> {
        fs::read(self.path(name)).expect("failed to read test file")
    }

    /// Whether a file exists in the project directory.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Remove a file from the project directory.
    pub fn remove(&self, name: &str) {
        fs::remove_file(self.path(name)).expect("failed to remove test file");
    }
}
