//! Browser rendering tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use sentinai_domain::{DashboardConfig, Drone, FeedTileVariant, ThreatLevel};
use sentinai_frontend::components::{Dashboard, ThreatLevelBadge, VideoFeed};
use sentinai_frontend::config::AppConfig;
use sentinai_frontend::state::provide_app_state;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root() -> web_sys::HtmlElement {
    let document = document();
    let root = document.create_element("section").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root.unchecked_into()
}

fn tiles(root: &web_sys::HtmlElement) -> Vec<web_sys::Element> {
    let nodes = root.query_selector_all(".feed-tile").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.unchecked_into())
        .collect()
}

fn mount_dashboard(config: AppConfig) -> web_sys::HtmlElement {
    let root = mount_root();
    let handle = leptos::mount::mount_to(root.clone(), move || {
        provide_meta_context();
        provide_app_state(config);
        view! { <Dashboard /> }
    });
    handle.forget();
    root
}

#[wasm_bindgen_test]
fn dashboard_renders_one_tile_per_drone() {
    let root = mount_dashboard(AppConfig::default());
    let tiles = tiles(&root);
    assert_eq!(tiles.len(), 6);

    let expected = ["HIGH", "LOW", "MEDIUM", "LOW", "MEDIUM", "HIGH"];
    for (index, (tile, level)) in tiles.iter().zip(expected).enumerate() {
        let id = (index + 1).to_string();
        assert_eq!(tile.get_attribute("data-drone-id").as_deref(), Some(id.as_str()));
        assert_eq!(tile.get_attribute("data-threat-level").as_deref(), Some(level));

        let text = tile.text_content().unwrap_or_default();
        assert!(text.contains(&format!("Live Feed - Drone {id}")), "{text}");
        assert!(text.contains(level), "{text}");
    }
}

#[wasm_bindgen_test]
fn dashboard_splits_rows_by_column_count() {
    let drones = (1..=5).map(|id| Drone::new(id, ThreatLevel::Low)).collect();
    let config = AppConfig {
        dashboard: DashboardConfig::new(drones, 2, FeedTileVariant::Classic).unwrap(),
        ..AppConfig::default()
    };
    let root = mount_dashboard(config);

    assert_eq!(root.query_selector_all(".feed-row").unwrap().length(), 3);
    assert_eq!(root.query_selector_all(".feed-tile.classic").unwrap().length(), 5);
}

#[wasm_bindgen_test]
fn collapsed_tile_has_no_modal() {
    let root = mount_root();
    let handle = leptos::mount::mount_to(root.clone(), || {
        provide_app_state(AppConfig::default());
        view! { <VideoFeed drone=Drone::new(9, ThreatLevel::Critical) /> }
    });
    handle.forget();

    assert!(root.query_selector(".feed-modal").unwrap().is_none());
    assert!(root.query_selector(".expand-button").unwrap().is_some());
}

/// Let pending reactive updates reach the DOM
async fn next_tick() {
    gloo_timers::future::TimeoutFuture::new(0).await;
}

fn click(root: &web_sys::HtmlElement, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} not rendered"))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

fn press_escape() {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    window().dispatch_event(&event).unwrap();
}

fn modal_open(root: &web_sys::HtmlElement) -> bool {
    root.query_selector(".feed-modal").unwrap().is_some()
}

#[wasm_bindgen_test]
async fn expanded_view_opens_and_closes() {
    let root = mount_root();
    let handle = leptos::mount::mount_to(root.clone(), || {
        provide_app_state(AppConfig::default());
        view! { <VideoFeed drone=Drone::new(9, ThreatLevel::Critical) /> }
    });
    handle.forget();

    click(&root, ".expand-button");
    next_tick().await;
    assert!(modal_open(&root));

    let modal = root.query_selector(".feed-modal").unwrap().unwrap();
    let text = modal.text_content().unwrap_or_default();
    assert!(text.contains("Drone 9 - Detailed Analysis"), "{text}");
    assert!(text.contains("YOLO Detection Feed - Drone 9"), "{text}");
    assert!(text.contains("Sonar Data: [Simulated sonar readings]"), "{text}");
    assert!(text.contains("Camera Analysis: [Object detection results]"), "{text}");
    assert!(text.contains("LLM Assessment: [Threat analysis details]"), "{text}");

    let title = modal.query_selector(".threat-level-title").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some("CRITICAL THREAT LEVEL"));
    assert!(title.get_attribute("style").unwrap().contains("#d32f2f"));

    click(&root, ".close-button");
    next_tick().await;
    assert!(!modal_open(&root));

    click(&root, ".expand-button");
    next_tick().await;
    assert!(modal_open(&root));

    press_escape();
    next_tick().await;
    assert!(!modal_open(&root));

    // open -> close -> open ends expanded
    click(&root, ".expand-button");
    next_tick().await;
    click(&root, ".close-button");
    next_tick().await;
    click(&root, ".expand-button");
    next_tick().await;
    assert!(modal_open(&root));
}

#[wasm_bindgen_test]
fn threat_badge_uses_classifier_color() {
    let root = mount_root();
    let handle = leptos::mount::mount_to(root.clone(), || {
        view! { <ThreatLevelBadge level=ThreatLevel::Critical description="Contact bearing 040" /> }
    });
    handle.forget();

    let title = root.query_selector(".threat-level-title").unwrap().unwrap();
    assert_eq!(title.text_content().as_deref(), Some("CRITICAL THREAT LEVEL"));
    assert!(title.get_attribute("style").unwrap().contains("#d32f2f"));
    assert!(root.query_selector("[data-icon=error]").unwrap().is_some());
}

#[wasm_bindgen_test]
fn unknown_threat_badge_has_no_icon() {
    let root = mount_root();
    let handle = leptos::mount::mount_to(root.clone(), || {
        view! { <ThreatLevelBadge level=ThreatLevel::parse("SEVERE") /> }
    });
    handle.forget();

    assert!(root.query_selector(".threat-icon").unwrap().is_none());
    let title = root.query_selector(".threat-level-title").unwrap().unwrap();
    assert!(title.get_attribute("style").unwrap().contains("#757575"));
}
