//! Path management for Counsel configuration and stored data.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/counsel/           # Config directory
//! └── config.toml              # Data-layer configuration
//!
//! ~/.local/share/counsel/      # Data directory
//! └── store/                   # Key-value storage, one JSON file per key
//!     ├── favorites.json
//!     └── search_history.json
//! ```
//!
//! Both roots can be overridden, which tests and the CLI `--data-dir`
//! flag use.

use std::path::PathBuf;

const APP_DIR: &str = "counsel";
const CONFIG_FILE: &str = "config.toml";
const STORE_DIR: &str = "store";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for counsel_core::CounselError {
    fn from(err: PathError) -> Self {
        counsel_core::CounselError::config(err.to_string())
    }
}

/// Resolves where Counsel keeps its files.
#[derive(Debug, Clone, Default)]
pub struct CounselPaths {
    config_override: Option<PathBuf>,
    data_override: Option<PathBuf>,
}

impl CounselPaths {
    /// Uses the platform directories unless `data_dir` is given, in which
    /// case both config and data live under it.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self {
            config_override: data_dir.clone(),
            data_override: data_dir,
        }
    }

    pub fn with_config_dir(mut self, config_dir: PathBuf) -> Self {
        self.config_override = Some(config_dir);
        self
    }

    /// e.g. `~/.config/counsel/`
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.config_override {
            Some(dir) => Ok(dir.clone()),
            None => dirs::config_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// e.g. `~/.local/share/counsel/`
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.data_override {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(PathError::DataDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    /// Directory handed to [`crate::storage::JsonFileStorage`].
    pub fn store_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join(STORE_DIR))
    }
}
