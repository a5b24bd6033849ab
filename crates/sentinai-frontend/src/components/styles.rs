//! Inline style builders derived from the [`Theme`].

use sentinai_domain::{Theme, ThreatLevel};

pub fn page(theme: &Theme) -> String {
    format!(
        "min-height: 100vh; background-color: {}; color: {}; font-family: {};",
        theme.background, theme.text_primary, theme.font_family
    )
}

/// Text filled with a gradient
pub fn gradient_text(gradient: &str) -> String {
    format!(
        "background: {gradient}; background-clip: text; -webkit-background-clip: text; color: transparent;"
    )
}

/// Translucent panel with the themed border
pub fn surface(theme: &Theme, radius_px: u32) -> String {
    format!(
        "background-color: {}; border: 1px solid {}; border-radius: {radius_px}px;",
        theme.surface, theme.border_color
    )
}

pub fn primary_button(theme: &Theme) -> String {
    format!(
        "background-color: {}; --hover-color: {}; color: {};",
        theme.primary, theme.primary_hover, theme.text_primary
    )
}

pub fn muted_text(theme: &Theme) -> String {
    format!("color: {};", theme.text_muted)
}

pub fn threat_text(level: ThreatLevel) -> String {
    format!("color: {};", level.color())
}

/// Grid row with a fixed column count
pub fn grid_row(columns: usize) -> String {
    format!("grid-template-columns: repeat({columns}, minmax(0, 1fr));")
}
