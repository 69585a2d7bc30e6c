//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `notra` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NotraCommand {
    args: Vec<String>,
    config: Option<PathBuf>,
}

impl NotraCommand {
    /// Creates a new command for the `notra` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config: None,
        }
    }

    /// Sets the `--db` option to specify the store path.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `NOTRA_CONFIG` at the given file.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notra").expect("Failed to find notra binary");
        cmd.args(&self.args).env_remove("NOTRA_LOG");
        if let Some(config) = &self.config {
            cmd.env("NOTRA_CONFIG", config);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `export` command.
    pub fn export(self) -> Self {
        self.args(["export"])
    }

    /// Configures for the `import` command with a payload file.
    pub fn import(self, file: &Path) -> Self {
        self.args(["import".to_string(), file.to_string_lossy().to_string()])
    }

    /// Adds `--user <id>`.
    pub fn user(self, user: &str) -> Self {
        self.args(["--user", user])
    }

    /// Adds `--input <file>`.
    pub fn input(self, file: &Path) -> Self {
        self.args(["--input".to_string(), file.to_string_lossy().to_string()])
    }

    /// Adds `--output <path>`.
    pub fn output(self, path: &Path) -> Self {
        self.args(["--output".to_string(), path.to_string_lossy().to_string()])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--cli-format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--cli-format", "json"])
    }

    /// Adds `--cli-format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--cli-format", "paths"])
    }
}

impl Default for NotraCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        NotraCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_db() {
        let temp = TempDir::new().unwrap();
        let db = temp.path().join("notra.db");
        let cmd = NotraCommand::new().db(&db);
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], db.to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts_append_in_order() {
        let cmd = NotraCommand::new().export().user("u1").format_json();
        assert_eq!(
            cmd.get_args(),
            ["export", "--user", "u1", "--cli-format", "json"]
        );
    }
}
