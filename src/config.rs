//! Settings for reaching the prediction service.
//!
//! Values come from `config.toml` in the app directory, with the base URL
//! overridable through the `PREDICTOR_API_URL` environment variable:
//!
//! ```toml
//! [service]
//! base_url = "http://localhost:8000"
//! connect_timeout_secs = 10
//! read_timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app_dirs;
use crate::http_client::Timeouts;

/// Default filename used to store the settings.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "PREDICTOR_API_URL";
/// Base URL used when neither the environment nor the settings file name one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors that may occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable config directory found.
    #[error("Config directory unavailable: {0}")]
    Directory(#[from] app_dirs::AppDirError),
    /// Failed to read the settings file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the settings file.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The resolved base URL is not an absolute http(s) URL.
    #[error("Invalid service URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Settings file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub service: ServiceSettings,
}

/// Connection settings for the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    #[serde(default)]
    pub base_url: Option<String>,
    /// Always applied; defaults to 10 seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Unset means a request may wait for the server indefinitely.
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: None,
        }
    }
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

/// Fully resolved service endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: Url,
    pub timeouts: Timeouts,
}

impl ServiceConfig {
    /// Build a config for `base_url` with default timeouts.
    pub fn for_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeouts: Timeouts::default(),
        })
    }

    /// Join `path` onto the base URL, keeping any path prefix the base carries.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

/// Resolve the settings file path inside the app directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from disk and apply the environment override.
pub fn load_service_config() -> Result<ServiceConfig, ConfigError> {
    let settings = load_settings_from(&config_path()?)?;
    let env_override = std::env::var(BASE_URL_ENV).ok();
    resolve_service_config(&settings, env_override.as_deref())
}

/// Read a settings file, returning defaults when it does not exist.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        tracing::debug!("No settings file at {}; using defaults", path.display());
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Combine file settings with an optional environment override.
///
/// Precedence: non-empty environment value, then the settings file, then
/// [`DEFAULT_BASE_URL`].
pub fn resolve_service_config(
    settings: &AppSettings,
    env_override: Option<&str>,
) -> Result<ServiceConfig, ConfigError> {
    let raw = env_override
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| {
            settings
                .service
                .base_url
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
        })
        .unwrap_or(DEFAULT_BASE_URL);
    Ok(ServiceConfig {
        base_url: parse_base_url(raw)?,
        timeouts: Timeouts {
            connect: Some(Duration::from_secs(settings.service.connect_timeout_secs)),
            read: settings.service.read_timeout_secs.map(Duration::from_secs),
        },
    })
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other:?}"))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}
