//! Initialization of the tracing subscriber for applications embedding the
//! client. Libraries only emit events; installing a subscriber is left to
//! the binary, which may call [`init_tracing`] once at startup.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set (e.g. "info", "fancyspaces_http=debug")
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Verbose human-readable output for local development
    pub fn dev() -> Self {
        Self {
            log_level: "fancyspaces_core=debug,fancyspaces_http=debug,info".to_string(),
            json: false,
        }
    }
}

/// Initialize tracing with the given configuration
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?;
    }

    Ok(())
}

/// Initialize with default configuration
pub fn init_default() -> Result<()> {
    init_tracing(&LogConfig::default())
}
