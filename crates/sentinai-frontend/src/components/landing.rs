//! # Landing Page Component
//!
//! Product overview with the entry point to the dashboard.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use super::icons::{Icon, SECURITY};
use super::styles;
use crate::DASHBOARD_PATH;
use crate::state::use_theme;

#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme();
    let navigate = use_navigate();

    let access_dashboard = move |_| {
        log::debug!("Navigating to {DASHBOARD_PATH}");
        navigate(DASHBOARD_PATH, Default::default());
    };

    view! {
        <Title text="SentinAI" />
        <section class="landing">
            <div class="landing-brand">
                <span class="landing-logo" style=format!("color: {};", theme.primary)>
                    <Icon path=SECURITY size=60 />
                </span>
                <h1 class="landing-title" style=styles::gradient_text(&theme.brand_gradient)>
                    "SentinAI"
                </h1>
            </div>

            <div class="landing-description">
                <h2 style=format!("color: {};", theme.text_primary)>
                    "Advanced Multimodal Threat Detection System"
                </h2>
                <p style=format!("color: {};", theme.text_secondary)>
                    "SentinAI is a cutting-edge defense platform that combines sonar and camera data \
                     with advanced AI to provide real-time threat analysis and automated agency \
                     notification. Our system processes multiple data streams simultaneously to \
                     ensure maximum security and rapid response capabilities."
                </p>
                <p style=format!("color: {};", theme.text_secondary)>
                    "Powered by state-of-the-art LLM technology for precise threat assessment \
                     and instantaneous multi-agency coordination."
                </p>
            </div>

            <div class="animated-border">
                <button
                    class="btn btn-primary btn-lg"
                    style=styles::primary_button(&theme)
                    on:click=access_dashboard
                >
                    "Access Dashboard"
                </button>
            </div>
        </section>
    }
}
