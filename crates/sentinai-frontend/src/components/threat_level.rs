//! # Threat Level Component
//!
//! Colored threat label with its icon.

use leptos::prelude::*;
use sentinai_domain::ThreatLevel;

use super::icons::ThreatIconView;
use super::styles;

/// Large threat banner used in the assessment panel
#[component]
pub fn ThreatLevelBadge(
    level: ThreatLevel,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    let style = level.style();

    view! {
        <div class="threat-level" data-level=level.as_str()>
            <div class="threat-level-header">
                <span class="threat-level-icon" style=format!("color: {};", style.color)>
                    <ThreatIconView icon=style.icon />
                </span>
                <h2 class="threat-level-title" style=styles::threat_text(level)>
                    {level.as_str()}" THREAT LEVEL"
                </h2>
            </div>
            {description.map(|text| view! { <p class="threat-level-description">{text}</p> })}
        </div>
    }
}

/// Compact label for tile headers
#[component]
pub fn ThreatLabel(level: ThreatLevel) -> impl IntoView {
    view! {
        <span class="threat-label" data-level=level.as_str() style=styles::threat_text(level)>
            {level.as_str()}
        </span>
    }
}
