//! Isolated test environment with temp directory.

use super::NotraCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary working directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Commands created from it use a store and config file inside it, so
/// no user configuration leaks into tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the working directory
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the path to the working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path where the SQLite store is kept.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("data").join("notra.db")
    }

    /// Returns the path of the config file commands read.
    ///
    /// The file does not exist until [`TestEnv::write_config`] is called.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Writes the config file read by commands.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        self.write_file("config.toml", toml)
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file relative to the test environment.
    pub fn read_file(&self, name: &str) -> String {
        let path = self.root.join(name);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Creates a NotraCommand configured for this test environment.
    pub fn cmd(&self) -> NotraCommand {
        NotraCommand::new()
            .config(&self.config_path())
            .db(&self.db_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "root should be a directory");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_db_path_is_inside_root() {
        let env = TestEnv::new();
        assert!(env.db_path().starts_with(env.root()));
        assert!(!env.db_path().exists(), "store is created lazily");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
    }
}
