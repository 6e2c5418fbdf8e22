use crate::constants::{DEFAULT_BASE_URL, DEFAULT_DEMO_USER, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the portfolio harness
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Settings for the demonstration sequence run by the binary
    pub demo: DemoConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the portfolio service
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the demonstration sequence
pub struct DemoConfig {
    /// User whose portfolio and settlement account are exercised
    pub user_id: String,
    /// Wipe all service data once the sequence finishes
    pub erase_after_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_DEMO_USER.to_string(),
            erase_after_run: false,
        }
    }
}

impl Config {
    /// Creates a new configuration from the environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("PORTFOLIO_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("PORTFOLIO_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            demo: DemoConfig {
                user_id: get_env_or_default("PORTFOLIO_USER_ID", String::from(DEFAULT_DEMO_USER)),
                erase_after_run: get_env_or_default("PORTFOLIO_ERASE_AFTER_RUN", false),
            },
        }
    }

    /// Creates a configuration pointing at `base_url` without reading the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            demo: DemoConfig::default(),
        }
    }
}
