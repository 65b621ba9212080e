//! Client configuration

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::providers::WidgetConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("timeout_seconds must be greater than zero")]
    InvalidTimeout,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Verification client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the verification service (e.g., "https://api.example/pop")
    pub api_url: String,

    /// Timeout for a single verification request, in seconds
    pub timeout_seconds: u64,

    /// Parameters passed to the uniqueness proof widget
    pub widget: WidgetConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            timeout_seconds: 30,
            widget: WidgetConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new config with a custom API base
    pub fn with_api(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Layer defaults, an optional config file and `PERSONHOOD_*` variables.
    ///
    /// Nested keys use a double underscore, e.g. `PERSONHOOD_WIDGET__SIGNAL`.
    /// `PERSONHOOD_APP_ID` is accepted as shorthand for
    /// `PERSONHOOD_WIDGET__APP_ID`. `api_url`, when given, overrides every
    /// source. The API URL is not validated here; see [`Self::verify_url`].
    pub fn load(path: Option<&Path>, api_url: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_from(path, api_url, None)
    }

    /// `load` with the environment taken from `env` instead of the process
    fn load_from(
        path: Option<&Path>,
        api_url: Option<&str>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PERSONHOOD")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        if let Some(api_url) = api_url {
            builder = builder.set_override("api_url", api_url)?;
        }

        let settings = builder.build()?;
        let mut config: Self = settings.clone().try_deserialize()?;

        if let Ok(app_id) = settings.get_string("app_id") {
            config.widget.app_id = app_id;
        }

        if config.timeout_seconds == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(config)
    }

    /// Full URL of the verification endpoint
    pub fn verify_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            reason,
        };

        let url = Url::parse(&format!("{}/verify", self.api_url.trim_end_matches('/')))
            .map_err(|e| invalid(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }
}
