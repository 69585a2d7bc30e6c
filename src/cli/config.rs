//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::ExportOptions;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "NOTRA_CONFIG";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Path to the SQLite store
    pub db: Option<PathBuf>,

    /// Default user whose data is exported
    pub user: Option<String>,

    /// Delay between emitted files, in milliseconds
    pub stagger_ms: Option<u64>,

    /// Default export options
    #[serde(default)]
    pub export: ExportOptions,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// `$NOTRA_CONFIG` if set, otherwise `~/.config/notra/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notra")
            .join("config.toml")
    }

    /// Resolve the store path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `db` setting
    /// 3. `notra.db` in the current directory
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.db.clone())
            .unwrap_or_else(|| PathBuf::from("notra.db"))
    }

    /// Resolve the user, with CLI argument taking precedence.
    pub fn user(&self, cli_user: Option<&str>) -> Option<String> {
        cli_user.map(str::to_string).or_else(|| self.user.clone())
    }

    /// Delay between emitted files.
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateFormat;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_no_db() {
        let config = Config::default();
        assert!(config.db.is_none());
        assert_eq!(config.export, ExportOptions::default());
    }

    #[test]
    fn db_path_prefers_cli_arg() {
        let config = Config {
            db: Some(PathBuf::from("/config/notra.db")),
            ..Config::default()
        };
        let cli_db = PathBuf::from("/cli/notra.db");
        assert_eq!(config.db_path(Some(&cli_db)), PathBuf::from("/cli/notra.db"));
    }

    #[test]
    fn db_path_falls_back_to_config_then_cwd() {
        let config = Config {
            db: Some(PathBuf::from("/config/notra.db")),
            ..Config::default()
        };
        assert_eq!(config.db_path(None), PathBuf::from("/config/notra.db"));
        assert_eq!(Config::default().db_path(None), PathBuf::from("notra.db"));
    }

    #[test]
    fn user_prefers_cli_arg() {
        let config = Config {
            user: Some("from-config".into()),
            ..Config::default()
        };
        assert_eq!(config.user(Some("from-cli")).as_deref(), Some("from-cli"));
        assert_eq!(config.user(None).as_deref(), Some("from-config"));
        assert_eq!(Config::default().user(None), None);
    }

    #[test]
    fn stagger_defaults_to_zero() {
        assert!(Config::default().stagger().is_zero());
    }

    #[test]
    fn load_from_missing_file_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.user.is_none());
    }

    #[test]
    fn load_from_parses_export_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            db = "/data/notra.db"
            user = "u1"
            stagger_ms = 100

            [export]
            date_format = "us"
            include_table_of_contents = false
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.db, Some(PathBuf::from("/data/notra.db")));
        assert_eq!(config.stagger(), Duration::from_millis(100));
        assert_eq!(config.export.date_format, DateFormat::Us);
        assert!(!config.export.include_table_of_contents);
        assert!(config.export.include_metadata);
    }

    #[test]
    fn load_from_reports_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "db = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"));
    }

    #[test]
    fn config_path_ends_with_notra_config() {
        if std::env::var_os(CONFIG_ENV).is_none() {
            assert!(Config::config_path().ends_with("notra/config.toml"));
        }
    }
}
