//! # SentinAI Threat Dashboard Frontend
//!
//! Landing page and drone feed dashboard for multimodal threat detection.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod components;
pub mod config;
pub mod services;
pub mod state;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use components::*;
use config::AppConfig;
use state::*;

pub const LANDING_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    provide_app_state(config);
    let theme = use_theme();

    view! {
        <Router>
            <main class="app" style=styles::page(&theme)>
                <Routes fallback=|| view! { <Redirect path=LANDING_PATH /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/dashboard") view=Dashboard />
                </Routes>
            </main>
        </Router>
    }
}

pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    // Fails only if a logger is already installed, which leaves logging working.
    let _ = console_log::init_with_level(config.log_level);
    log::info!("SentinAI dashboard v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Threat analysis API at {}", config.api.base_url);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
