//! Shared configuration for Sproutly client applications.
//!
//! One TOML file plus `SPROUTLY_`-prefixed environment variables resolve
//! into a [`Config`], which translates to the api crate's
//! [`ApiConfig`](sproutly_api::ApiConfig) and session store. Embedding
//! binaries depend on this crate; `sproutly-core` never reads config
//! files.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sproutly_api::{ApiConfig, DEFAULT_BASE_URL, FileSessionStore};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config struct ───────────────────────────────────────────────────

/// Top-level configuration shared by every Sproutly client binary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Backend base URL, including the API path prefix.
    /// `SPROUTLY_API_URL` overrides it.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds. Unset means requests never time out,
    /// matching the wire contract.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Where the signed-in session is persisted. Defaults to the
    /// platform data directory.
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: None,
            session_file: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("app", "sproutly", "sproutly").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("sproutly");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Loading and saving ──────────────────────────────────────────────

/// Load the full [`Config`] from defaults, file, and environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("SPROUTLY_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, falling back to defaults if the file doesn't exist or
/// doesn't parse.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation to api-crate types ──────────────────────────────────

impl Config {
    /// Validate and translate into the api crate's client configuration.
    pub fn to_api_config(&self) -> Result<ApiConfig, ConfigError> {
        let mut api = ApiConfig::new(&self.api_url).map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", self.api_url),
        })?;

        if let Some(secs) = self.timeout_secs {
            if secs == 0 {
                return Err(ConfigError::Validation {
                    field: "timeout_secs".into(),
                    reason: "must be at least 1 second (unset it to disable)".into(),
                });
            }
            api = api.with_timeout(Duration::from_secs(secs));
        }

        Ok(api)
    }

    /// Build the file-backed session store this config points at.
    pub fn session_store(&self) -> FileSessionStore {
        match &self.session_file {
            Some(path) => FileSessionStore::new(path.clone()),
            None => FileSessionStore::at_default_path(),
        }
    }
}
