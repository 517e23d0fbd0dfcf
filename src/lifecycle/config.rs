//! # Configuration
//!
//! [`DashboardConfig`] can be built from defaults, from a JSON document, or from
//! environment variables:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `DASHBOARD_API_URL` | `api_base_url` | `http://localhost:3000` |
//! | `DASHBOARD_REQUEST_TIMEOUT_SECS` | `request_timeout_secs` | none (no deadline) |

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const ENV_API_URL: &str = "DASHBOARD_API_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "DASHBOARD_REQUEST_TIMEOUT_SECS";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Base URL the `/products` and `/users` collections live under.
    pub api_base_url: String,
    /// Per-request deadline. `None` lets requests run to completion.
    pub request_timeout_secs: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl DashboardConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DashboardError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT).filter(|v| !v.trim().is_empty()) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                DashboardError::Config(format!("{ENV_REQUEST_TIMEOUT} must be whole seconds, got {raw:?}"))
            })?;
            config.request_timeout_secs = Some(secs);
        }
        Ok(config)
    }

    /// Parses a JSON config document. Missing keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self, DashboardError> {
        serde_json::from_str(text).map_err(|e| DashboardError::Config(e.to_string()))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
