//! # SentinAI Threat Dashboard - Domain Model
//!
//! Threat classification, drone feed records, dashboard layout and theme
//! configuration. These types are shared by every view of the frontend and
//! carry no rendering or browser dependencies.

use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

// =============================================================================
// THREAT CLASSIFICATION
// =============================================================================

/// Neutral color used for any threat level that is not recognized.
pub const FALLBACK_COLOR: &str = "#757575";

/// Threat level classification attached to a drone feed.
///
/// Parsing is case-sensitive and total: any label other than the four known
/// ones (including an empty, absent or non-string label) becomes
/// [`ThreatLevel::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Option<serde_json::Value>")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Critical,
    #[default]
    Unknown,
}

impl ThreatLevel {
    /// All recognized levels, in display order.
    pub const KNOWN: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            "CRITICAL" => Self::Critical,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Display color as an RGB hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#4caf50",
            Self::Medium => "#ff9800",
            Self::High => "#f44336",
            Self::Critical => "#d32f2f",
            Self::Unknown => FALLBACK_COLOR,
        }
    }

    pub const fn icon(self) -> ThreatIcon {
        match self {
            Self::Low => ThreatIcon::Check,
            Self::Medium => ThreatIcon::Warning,
            Self::High | Self::Critical => ThreatIcon::Error,
            Self::Unknown => ThreatIcon::None,
        }
    }

    pub const fn style(self) -> ThreatStyle {
        ThreatStyle {
            color: self.color(),
            icon: self.icon(),
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl From<&str> for ThreatLevel {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<Option<&str>> for ThreatLevel {
    fn from(label: Option<&str>) -> Self {
        label.map_or(Self::Unknown, Self::parse)
    }
}

impl From<Option<String>> for ThreatLevel {
    fn from(label: Option<String>) -> Self {
        Self::from(label.as_deref())
    }
}

impl From<Option<serde_json::Value>> for ThreatLevel {
    fn from(label: Option<serde_json::Value>) -> Self {
        match label {
            Some(serde_json::Value::String(label)) => Self::parse(&label),
            _ => Self::Unknown,
        }
    }
}

impl Serialize for ThreatLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon identifier paired with a threat level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatIcon {
    Check,
    Warning,
    Error,
    None,
}

impl ThreatIcon {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::None => "none",
        }
    }
}

/// Presentation of a threat level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreatStyle {
    pub color: &'static str,
    pub icon: ThreatIcon,
}

/// Classify a raw threat label into its display color and icon.
///
/// ```
/// use sentinai_domain::{classify, ThreatIcon};
///
/// assert_eq!(classify("HIGH").color, "#f44336");
/// assert_eq!(classify(None).icon, ThreatIcon::None);
/// ```
pub fn classify<'a>(label: impl Into<Option<&'a str>>) -> ThreatStyle {
    let label: Option<&str> = label.into();
    ThreatLevel::from(label).style()
}

// =============================================================================
// DRONE FEEDS
// =============================================================================

/// Drone feed record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drone {
    pub id: u32,
    #[serde(default)]
    pub threat_level: ThreatLevel,
}

impl Drone {
    pub const fn new(id: u32, threat_level: ThreatLevel) -> Self {
        Self { id, threat_level }
    }
}

/// The static fleet shown on the dashboard.
#[must_use]
pub fn simulated_fleet() -> Vec<Drone> {
    use ThreatLevel::{High, Low, Medium};

    [High, Low, Medium, Low, Medium, High]
        .into_iter()
        .zip(1..)
        .map(|(level, id)| Drone::new(id, level))
        .collect()
}

// =============================================================================
// FEED TILE STATE
// =============================================================================

/// Look of a collapsed feed tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedTileVariant {
    /// Placeholder with an overlaid expand button and a hover lift
    Classic,
    /// Header row with the colored threat label above the placeholder
    #[default]
    ThreatBadge,
}

/// User action on a feed tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAction {
    Open,
    Close,
}

/// Expansion state of a single feed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedTileState {
    #[default]
    Collapsed,
    Expanded,
}

impl FeedTileState {
    pub fn open(&mut self) {
        *self = Self::Expanded;
    }

    pub fn close(&mut self) {
        *self = Self::Collapsed;
    }

    pub fn apply(&mut self, action: TileAction) {
        match action {
            TileAction::Open => self.open(),
            TileAction::Close => self.close(),
        }
    }

    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

// =============================================================================
// DASHBOARD LAYOUT
// =============================================================================

/// Which drones the dashboard shows and how the grid is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    drones: Vec<Drone>,
    columns: usize,
    variant: FeedTileVariant,
}

impl DashboardConfig {
    pub const DEFAULT_COLUMNS: usize = 3;

    /// Build a validated layout. Tiles are keyed by drone id, so ids must be
    /// unique, and the grid needs at least one column.
    pub fn new(
        drones: Vec<Drone>,
        columns: usize,
        variant: FeedTileVariant,
    ) -> Result<Self, DomainError> {
        if columns == 0 {
            return Err(DomainError::InvalidColumns);
        }

        let mut seen = HashSet::with_capacity(drones.len());
        if let Some(dup) = drones.iter().find(|d| !seen.insert(d.id)) {
            return Err(DomainError::DuplicateDroneId(dup.id));
        }

        Ok(Self {
            drones,
            columns,
            variant,
        })
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn variant(&self) -> FeedTileVariant {
        self.variant
    }

    /// Drones split into consecutive rows of at most `columns` tiles.
    pub fn rows(&self) -> Vec<Vec<Drone>> {
        self.drones
            .chunks(self.columns)
            .map(<[Drone]>::to_vec)
            .collect()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            drones: simulated_fleet(),
            columns: Self::DEFAULT_COLUMNS,
            variant: FeedTileVariant::default(),
        }
    }
}

// =============================================================================
// THEME
// =============================================================================

/// Palette and typography handed to every component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: String,
    pub primary_hover: String,
    pub background: String,
    pub paper: String,
    pub surface: String,
    pub border_color: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_muted: String,
    pub font_family: String,
    pub heading_gradient: String,
    pub brand_gradient: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#1E40AF".into(),
            primary_hover: "#2563EB".into(),
            background: "#0A0A0A".into(),
            paper: "#141414".into(),
            surface: "rgba(20, 20, 20, 0.95)".into(),
            border_color: "rgba(30, 64, 175, 0.1)".into(),
            text_primary: "#FFFFFF".into(),
            text_secondary: "rgba(255, 255, 255, 0.8)".into(),
            text_muted: "rgba(255, 255, 255, 0.5)".into(),
            font_family: r#""Inter", "Roboto", "Helvetica", "Arial", sans-serif"#.into(),
            heading_gradient:
                "linear-gradient(45deg, #4169E1 0%, #6495ED 30%, #87CEEB 60%, #B0E0E6 90%)".into(),
            brand_gradient:
                "linear-gradient(45deg, #0A2472 0%, #1E3B8A 30%, #2B4ECB 60%, #4169E1 90%)".into(),
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Dashboard needs at least one column")]
    InvalidColumns,

    #[error("Drone id {0} appears more than once")]
    DuplicateDroneId(u32),
}
