//! # Application State
//!
//! Configuration shared with every component through Leptos context.

use leptos::prelude::*;
use sentinai_domain::{DashboardConfig, Theme};

use crate::config::{ApiConfig, AppConfig};
use crate::services::ApiClient;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: StoredValue<Theme>,
    pub dashboard: StoredValue<DashboardConfig>,
    pub api: StoredValue<ApiConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            theme: StoredValue::new(config.theme),
            dashboard: StoredValue::new(config.dashboard),
            api: StoredValue::new(config.api),
        }
    }
}

pub fn provide_app_state(config: AppConfig) {
    provide_context(AppState::new(config));
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Snapshot of the current theme
pub fn use_theme() -> Theme {
    use_app_state().theme.get_value()
}

/// Threat analysis client bound to the configured endpoint
pub fn use_api_client() -> ApiClient {
    ApiClient::new(use_app_state().api.get_value())
}
