//! # Dashboard Component
//!
//! Grid of drone feed tiles.

use leptos::prelude::*;
use leptos_meta::Title;

use super::styles;
use super::video_feed::VideoFeed;
use crate::state::{use_app_state, use_theme};

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let theme = use_theme();

    let (rows, columns, variant) = state
        .dashboard
        .with_value(|dashboard| (dashboard.rows(), dashboard.columns(), dashboard.variant()));

    let grid = if rows.is_empty() {
        view! {
            <div class="dashboard-empty" style=styles::muted_text(&theme)>
                "No drone feeds configured"
            </div>
        }
        .into_any()
    } else {
        rows.into_iter()
            .map(move |row| {
                view! {
                    <div class="feed-row" style=styles::grid_row(columns)>
                        <For
                            each=move || row.clone()
                            key=|drone| drone.id
                            children=move |drone| view! { <VideoFeed drone=drone variant=variant /> }
                        />
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Title text="Threat Analysis Dashboard" />
        <section class="dashboard">
            <h1 class="dashboard-title" style=styles::gradient_text(&theme.heading_gradient)>
                "Threat Analysis Dashboard"
            </h1>
            <div class="dashboard-grid" style=styles::surface(&theme, 16)>
                {grid}
            </div>
        </section>
    }
}
