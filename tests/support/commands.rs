//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a cred command running in the test directory.
    ///
    /// Colors are disabled and `CRED_PASSWORD` is cleared so tests
    /// control the password explicitly.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("cred").expect("failed to find cred binary");
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("CRED_PASSWORD");
        cmd.env_remove("CRED_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `cred encrypt -p <password>`.
    pub fn encrypt(&self, password: &str) -> Output {
        self.cmd()
            .args(["encrypt", "-p", password])
            .output()
            .expect("failed to run cred encrypt")
    }

    /// Shortcut for `cred decrypt -p <password>`.
    pub fn decrypt(&self, password: &str) -> Output {
        self.cmd()
            .args(["decrypt", "-p", password])
            .output()
            .expect("failed to run cred decrypt")
    }

    /// Shortcut for `cred concat`.
    pub fn concat(&self) -> Output {
        self.cmd()
            .arg("concat")
            .output()
            .expect("failed to run cred concat")
    }
}
