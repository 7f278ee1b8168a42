//! Loading and saving the data-layer configuration file.

use std::path::PathBuf;

use counsel_core::config::DataLayerConfig;
use counsel_core::error::{CounselError, Result};

/// Reads `config.toml`, falling back to defaults when it is missing or empty.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(config)`: parsed file, or defaults if the file is missing or blank
    /// - `Err(CounselError::Serialization)`: the file exists but is not valid TOML
    pub async fn load(&self) -> Result<DataLayerConfig> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {:?}, using defaults", self.path);
                return Ok(DataLayerConfig::default());
            }
            Err(e) => {
                return Err(CounselError::io(format!(
                    "Failed to read config file at {:?}: {}",
                    self.path, e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(DataLayerConfig::default());
        }

        let config: DataLayerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub async fn save(&self, config: &DataLayerConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CounselError::io(format!("Failed to create config directory: {}", e))
            })?;
        }

        let serialized = toml::to_string_pretty(config)?;
        tokio::fs::write(&self.path, serialized)
            .await
            .map_err(|e| CounselError::io(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
