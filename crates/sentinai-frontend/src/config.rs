//! # Frontend Configuration
//!
//! Build-time configuration for the dashboard. A browser has no process
//! environment, so values are captured with `option_env!` when the WASM
//! bundle is compiled.

use sentinai_domain::{DashboardConfig, Theme};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Everything the app needs at mount time
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Threat analysis API
    pub api: ApiConfig,

    /// Palette and typography
    pub theme: Theme,

    /// Which drones are shown and how
    pub dashboard: DashboardConfig,

    /// Console logging level
    pub log_level: log::Level,
}

impl AppConfig {
    /// Load configuration from the build environment
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            log_level: parse_log_level(option_env!("LOG_LEVEL")),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            theme: Theme::default(),
            dashboard: DashboardConfig::default(),
            log_level: log::Level::Info,
        }
    }
}

/// Threat analysis API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Join `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.parse().ok()).unwrap_or(log::Level::Info)
}
