//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--data`, `--no-color`, `--output-format`, handled at the call-site)
//! 2. `TIMETABLE_*` environment variables, nested keys split on `__`
//!    (e.g. `TIMETABLE_STORAGE__DATA_FILE`); `.env` is loaded first
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the timetable lives.
    pub storage: StorageConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_file: Self::default_data_file(),
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist when
    /// given. Without it the platform config file is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path()).required(false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix("TIMETABLE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.timetable.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "timetable", "timetable")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".timetable.toml"))
    }

    fn default_data_file() -> PathBuf {
        directories::ProjectDirs::from("org", "timetable", "timetable")
            .map(|d| d.data_dir().join("timetable.json"))
            .unwrap_or_else(|| PathBuf::from("timetable.json"))
    }

    /// The data file to use: `--data` wins over configuration.
    pub fn data_file<'a>(&'a self, flag: Option<&'a Path>) -> &'a Path {
        flag.unwrap_or(&self.storage.data_file)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn default_data_file_is_json() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.storage.data_file.extension().and_then(|e| e.to_str()),
            Some("json")
        );
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timetable.toml");
        fs::write(
            &path,
            "[storage]\ndata_file = \"/srv/school.json\"\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.storage.data_file, PathBuf::from("/srv/school.json"));
        assert_eq!(cfg.output.format, "json");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn data_flag_wins() {
        let cfg = AppConfig::default();
        let flag = PathBuf::from("/tmp/other.json");
        assert_eq!(cfg.data_file(Some(&flag)), flag.as_path());
        assert_eq!(cfg.data_file(None), cfg.storage.data_file.as_path());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
