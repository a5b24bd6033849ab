//! # Video Feed Component
//!
//! One drone feed tile and its full-screen detail view.

use leptos::ev;
use leptos::prelude::*;
use sentinai_domain::{Drone, FeedTileState, FeedTileVariant};

use super::icons::{CLOSE, Icon, OPEN_IN_FULL};
use super::llm_assessment::LlmAssessment;
use super::styles;
use super::threat_level::ThreatLabel;
use super::yolo_feed::YoloFeed;
use crate::state::use_theme;

/// Feed tile. Each tile owns its own expansion state.
#[component]
pub fn VideoFeed(drone: Drone, #[prop(optional)] variant: FeedTileVariant) -> impl IntoView {
    let theme = use_theme();
    let tile = RwSignal::new(FeedTileState::default());
    let Drone { id, threat_level } = drone;

    let open = move |_| {
        tile.update(FeedTileState::open);
        log::debug!("Drone {id} feed expanded");
    };
    let close = move |_| {
        tile.update(FeedTileState::close);
        log::debug!("Drone {id} feed collapsed");
    };

    // Escape dismisses the detail view
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && tile.get_untracked().is_expanded() {
            tile.update(FeedTileState::close);
            log::debug!("Drone {id} feed collapsed");
        }
    });
    on_cleanup(move || keydown.remove());

    let frame_style = format!("background-color: {};", theme.background);
    let caption_style = styles::muted_text(&theme);

    let collapsed = match variant {
        FeedTileVariant::Classic => view! {
            <div class="video-container" style=styles::surface(&theme, 8)>
                <div class="video-frame" style=frame_style>
                    <span class="feed-caption" style=caption_style>
                        "Live Feed - Drone "{id}
                    </span>
                    <button class="expand-button overlay" aria-label="Expand feed" on:click=open>
                        <Icon path=OPEN_IN_FULL />
                    </button>
                </div>
            </div>
        }
        .into_any(),
        FeedTileVariant::ThreatBadge => view! {
            <div class="video-container" style=styles::surface(&theme, 12)>
                <div class="feed-tile-header">
                    <ThreatLabel level=threat_level />
                    <button
                        class="expand-button"
                        aria-label="Expand feed"
                        style=format!("color: {};", theme.primary)
                        on:click=open
                    >
                        <Icon path=OPEN_IN_FULL />
                    </button>
                </div>
                <div class="video-frame" style=frame_style>
                    <span class="feed-caption" style=caption_style>
                        "Live Feed - Drone "{id}
                    </span>
                </div>
            </div>
        }
        .into_any(),
    };

    let variant_class = match variant {
        FeedTileVariant::Classic => "feed-tile classic",
        FeedTileVariant::ThreatBadge => "feed-tile badged",
    };
    let modal_style = format!("background-color: {};", theme.background);
    let title_style = styles::gradient_text(&theme.heading_gradient);
    let close_style = format!("color: {};", theme.text_primary);

    view! {
        <div
            class=variant_class
            class:expanded=move || tile.get().is_expanded()
            data-drone-id=id.to_string()
            data-threat-level=threat_level.as_str()
        >
            {collapsed}
        </div>

        <Show when=move || tile.get().is_expanded()>
            <div class="feed-modal" role="dialog" aria-modal="true" style=modal_style.clone()>
                <div class="feed-modal-header">
                    <h2 class="feed-modal-title" style=title_style.clone()>
                        "Drone "{id}" - Detailed Analysis"
                    </h2>
                    <button
                        class="close-button"
                        aria-label="Close"
                        style=close_style.clone()
                        on:click=close
                    >
                        <Icon path=CLOSE />
                    </button>
                </div>
                <div class="feed-modal-body">
                    <div class="feed-modal-video">
                        <YoloFeed drone_id=id />
                    </div>
                    <LlmAssessment threat_level=threat_level />
                </div>
            </div>
        </Show>
    }
}
