//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

use super::types::Config;

/// Loads a configuration file and keeps the parsed result.
///
/// # Example
///
/// ```no_run
/// use hydra_app::config::ConfigLoader;
///
/// let loader = ConfigLoader::load_from("/srv/app", "config.yaml")?;
/// println!("{}", loader.config().pretty()?);
/// # Ok::<(), hydra_app::error::AppError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    config: Config,
}

impl ConfigLoader {
    /// Loads configuration from a path relative to the current directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML, or its top level is not a mapping
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let config = Self::read(&path)?;
        Ok(Self { path, config })
    }

    /// Loads configuration from `path` resolved against `base_dir`.
    ///
    /// Absolute paths ignore `base_dir`.
    pub fn load_from<B: AsRef<Path>, P: AsRef<Path>>(base_dir: B, path: P) -> AppResult<Self> {
        Self::load(Self::resolve(base_dir, path))
    }

    /// Resolves a config path against a base directory.
    pub fn resolve<B: AsRef<Path>, P: AsRef<Path>>(base_dir: B, path: P) -> PathBuf {
        base_dir.as_ref().join(path)
    }

    /// Decodes raw file contents into a [`Config`].
    ///
    /// `path` only labels diagnostics.
    pub fn parse(path: &str, bytes: &[u8]) -> AppResult<Config> {
        let content = std::str::from_utf8(bytes).map_err(|e| AppError::ConfigParseError {
            path: path.to_string(),
            message: format!("file is not valid UTF-8: {}", e),
        })?;

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let mut document: Value =
            serde_yaml::from_str(content).map_err(|e| AppError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        // Expand `<<` merge keys before the top-level shape is checked.
        document
            .apply_merge()
            .map_err(|e| AppError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Config::from_document(path, document)
    }

    /// Reads and parses a YAML file.
    fn read(path: &Path) -> AppResult<Config> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let bytes = fs::read(path).map_err(|e| {
            warn!(path = %path_str, error = %e, "Configuration file could not be read");
            AppError::ConfigNotFound {
                path: path_str.clone(),
            }
        })?;

        let config = Self::parse(&path_str, &bytes).inspect_err(|e| {
            warn!(path = %path_str, error = %e, "Configuration file is invalid");
        })?;

        info!(path = %path_str, keys = config.len(), "Loaded configuration");
        Ok(config)
    }

    /// Returns the path the configuration was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }
}
