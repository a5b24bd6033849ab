//! # Detection Feed Component
//!
//! Placeholder for the object-detection video stream. The overlay layer is
//! where detection boxes would be drawn.

use leptos::prelude::*;

use super::styles;
use crate::state::use_theme;

#[component]
pub fn YoloFeed(drone_id: u32) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="yolo-feed" style=format!("background-color: {};", theme.background)>
            <span class="feed-caption" style=styles::muted_text(&theme)>
                "YOLO Detection Feed - Drone "{drone_id}
            </span>
            <div class="detection-overlay"></div>
        </div>
    }
}
