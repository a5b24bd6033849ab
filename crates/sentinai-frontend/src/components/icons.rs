//! # Icons
//!
//! Inline SVG icons in the Material style.

use leptos::prelude::*;
use sentinai_domain::ThreatIcon;

pub const OPEN_IN_FULL: &str = "M21 11V3h-8l3.29 3.29-10 10L3 13v8h8l-3.29-3.29 10-10z";
pub const CLOSE: &str = "M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z";
pub const SECURITY: &str = "M12 1 3 5v6c0 5.55 3.84 10.74 9 12 5.16-1.26 9-6.45 9-12V5l-9-4zm0 10.99h7c-.53 4.12-3.28 7.79-7 8.94V12H5V6.3l7-3.11v8.8z";

const CHECK_CIRCLE: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z";
const WARNING: &str = "M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z";
const ERROR: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z";

/// SVG path for a threat icon; `None` draws nothing.
pub const fn threat_icon_path(icon: ThreatIcon) -> Option<&'static str> {
    match icon {
        ThreatIcon::Check => Some(CHECK_CIRCLE),
        ThreatIcon::Warning => Some(WARNING),
        ThreatIcon::Error => Some(ERROR),
        ThreatIcon::None => None,
    }
}

#[component]
pub fn Icon(path: &'static str, #[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <svg
            class="icon"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=path />
        </svg>
    }
}

#[component]
pub fn ThreatIconView(icon: ThreatIcon, #[prop(default = 40)] size: u32) -> impl IntoView {
    threat_icon_path(icon).map(|path| {
        view! {
            <span class="threat-icon" data-icon=icon.as_str()>
                <Icon path=path size=size />
            </span>
        }
    })
}
