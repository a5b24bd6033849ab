//! # Assessment Panel Component
//!
//! Side panel of the expanded view. Sensor readings and the language-model
//! assessment are placeholders until an analysis source is wired in.

use leptos::prelude::*;
use sentinai_domain::ThreatLevel;

use super::styles;
use super::threat_level::ThreatLevelBadge;
use crate::state::use_theme;

#[component]
pub fn LlmAssessment(threat_level: ThreatLevel) -> impl IntoView {
    let theme = use_theme();

    view! {
        <aside class="assessment-panel" style=styles::surface(&theme, 16)>
            <h3 class="assessment-title">"Threat Analysis"</h3>
            <ThreatLevelBadge level=threat_level />
            <div class="assessment-body" style=format!("color: {};", theme.text_secondary)>
                <p>"Sonar Data: [Simulated sonar readings]"</p>
                <p>"Camera Analysis: [Object detection results]"</p>
                <p>"LLM Assessment: [Threat analysis details]"</p>
            </div>
        </aside>
    }
}
