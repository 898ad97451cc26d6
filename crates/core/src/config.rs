//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::storage::default_storage_dir;
use crate::{CoreError, CoreResult};

/// Environment variable prefix for overrides, e.g. `FANCYSPACES_IDP_API_URL`
pub const ENV_PREFIX: &str = "FANCYSPACES";

/// Endpoints and transport settings for the FancySpaces services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Spaces, issues, versions, secrets, maven and blog API
    pub core_api_url: String,

    /// Identity provider: tokens, users, API keys
    pub idp_api_url: String,

    /// Dashboards, events, logs, metrics and templates
    pub analytics_api_url: String,

    /// Storage engines (key/value command surface)
    pub storage_api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// API key for resources authorized by key rather than session
    #[serde(default)]
    pub api_key: Option<String>,

    /// Directory for persisted session state
    pub storage_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            core_api_url: "https://fancyspaces.net/api/v1".to_string(),
            idp_api_url: "https://idp.fancyspaces.net/idp/api/v1".to_string(),
            analytics_api_url: "https://fancyspaces.net/analytics/api/v1".to_string(),
            storage_api_url: "https://fancyspaces.net/storage/api/v1".to_string(),
            timeout_secs: 30,
            user_agent: concat!("fancyspaces-client/", env!("CARGO_PKG_VERSION")).to_string(),
            api_key: None,
            storage_dir: default_storage_dir(),
        }
    }
}

impl ClientConfig {
    /// Configuration where every service lives under one origin, using the
    /// platform's path layout.
    pub fn for_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            core_api_url: format!("{origin}/api/v1"),
            idp_api_url: format!("{origin}/idp/api/v1"),
            analytics_api_url: format!("{origin}/analytics/api/v1"),
            storage_api_url: format!("{origin}/storage/api/v1"),
            ..Self::default()
        }
    }

    /// Load configuration from file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let settings = Self::with_defaults()?
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed
    pub fn from_env() -> CoreResult<Self> {
        let settings = Self::with_defaults()?
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every service URL is absolute
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("core_api_url", &self.core_api_url),
            ("idp_api_url", &self.idp_api_url),
            ("analytics_api_url", &self.analytics_api_url),
            ("storage_api_url", &self.storage_api_url),
        ] {
            Url::parse(value)
                .map_err(|e| CoreError::invalid_config(format!("{name} '{value}': {e}")))?;
        }

        if self.timeout_secs == 0 {
            return Err(CoreError::invalid_config("timeout_secs must be positive"));
        }

        Ok(())
    }

    fn with_defaults() -> CoreResult<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();

        Ok(config::Config::builder()
            .set_default("core_api_url", defaults.core_api_url)?
            .set_default("idp_api_url", defaults.idp_api_url)?
            .set_default("analytics_api_url", defaults.analytics_api_url)?
            .set_default("storage_api_url", defaults.storage_api_url)?
            .set_default("timeout_secs", defaults.timeout_secs)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default(
                "storage_dir",
                defaults.storage_dir.to_string_lossy().to_string(),
            )?)
    }
}
