//! # UI Components Module
//!
//! Leptos components for the landing page and threat dashboard.

pub mod dashboard;
pub mod icons;
pub mod landing;
pub mod llm_assessment;
pub mod styles;
pub mod threat_level;
pub mod video_feed;
pub mod yolo_feed;

pub use dashboard::*;
pub use landing::*;
pub use llm_assessment::*;
pub use threat_level::*;
pub use video_feed::*;
pub use yolo_feed::*;
