//! # Application Configuration
//!
//! Where the API lives and where the session is kept.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BURGER_API_URL=https://norma.nomoreparties.space/api               │
//! │     BURGER_TIMEOUT_SECS=10                                             │
//! │     BURGER_DATA_DIR=/var/lib/burgers                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/burgers/config.toml (Linux)                              │
//! │     ~/Library/Application Support/com.stellar.burgers/config.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! api_url = "https://norma.nomoreparties.space/api"
//! request_timeout_secs = 10
//! feed_limit = 20
//! data_dir = "/home/me/.local/share/burgers"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Public API root.
pub const DEFAULT_API_URL: &str = "https://norma.nomoreparties.space/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of feed orders listed.
pub const DEFAULT_FEED_LIMIT: usize = 20;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root URL of the REST API, without a trailing endpoint.
    pub api_url: String,

    /// Per-request timeout.
    pub request_timeout_secs: u64,

    /// How many feed orders to list.
    pub feed_limit: usize,

    /// Where `session.json` lives. Platform data dir when unset.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            feed_limit: DEFAULT_FEED_LIMIT,
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`AppConfig::load`] with the environment supplied by `lookup`.
    fn load_with(
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Checks values that would only fail later at request time.
    pub fn validate(&self) -> StoreResult<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(StoreError::Config(format!(
                "api_url must start with http:// or https://, got: {}",
                self.api_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(StoreError::Config(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `BURGER_*` overrides from `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("BURGER_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api_url = url;
        }

        if let Some(secs) = lookup("BURGER_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric BURGER_TIMEOUT_SECS"),
            }
        }

        if let Some(dir) = lookup("BURGER_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// The configured data dir, or the platform one.
    pub fn resolve_data_dir(&self) -> StoreResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or(StoreError::NoDataDir),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "stellar", "burgers")
}
