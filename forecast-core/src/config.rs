use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    model::ForecastRequest,
};

/// Configuration stored on disk as TOML.
///
/// Example:
/// ```toml
/// api_key = "..."
/// latitude = 55.75
/// longitude = 37.62
/// days = 3
/// ```
///
/// TOML deserialization keeps all string-to-number parsing at this
/// boundary: a quoted latitude or a non-integer day count fails here as a
/// configuration error, never inside the request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
    pub latitude: f64,
    pub longitude: f64,
    pub days: u32,
}

impl Config {
    /// Load config from `path`, or from the platform default location.
    ///
    /// A missing file is a configuration error with a hint to run
    /// `forecast configure` first.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };
        log::debug!("loading configuration from {}", path.display());

        if !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {}.\n\
                 Hint: run `forecast configure` to create it.",
                path.display()
            )));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            Error::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("failed to parse config file: {e}")))?;

        cfg.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config(
                "API key is missing or empty.\n\
                 Hint: set `api_key` in the config file, or run `forecast configure`."
                    .to_string(),
            ));
        }

        if self.days == 0 {
            return Err(Error::Config(
                "`days` must be a positive integer".to_string(),
            ));
        }

        Ok(self)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        self.clone().validate()?;

        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!(
                    "failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let toml = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize configuration: {e}")))?;

        fs::write(&path, toml).map_err(|e| {
            Error::Config(format!("failed to write config file {}: {e}", path.display()))
        })?;

        Ok(path)
    }

    /// Platform default path to the config file.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-fetcher", "forecast-cli").ok_or_else(
            || Error::Config("could not determine platform config directory".to_string()),
        )?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Typed request parameters for the client.
    pub fn request(&self) -> ForecastRequest {
        ForecastRequest {
            latitude: self.latitude,
            longitude: self.longitude,
            days: self.days,
        }
    }
}
