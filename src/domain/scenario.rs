use serde::{Deserialize, Serialize};

use super::geometry::{DelayRange, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Stage that waits for a template match and schedules a jittered tap on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateTapStage {
    pub id: String,
    pub timeout_ms: u64,
    pub search_region: Rect,
    pub delay_before_tap: DelayRange,
    pub click_jitter_px: u32,
    pub threshold: f64,
    #[serde(default = "default_stable_frames")]
    pub stable_frames_required: u32,
}

/// Stage that schedules a directional scroll gesture inside a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollStage {
    pub id: String,
    pub timeout_ms: u64,
    pub region: Rect,
    pub direction: ScrollDirection,
    pub distance_px_min: u32,
    pub distance_px_max: u32,
    pub duration_ms_min: u64,
    pub duration_ms_max: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stage {
    TemplateTap(TemplateTapStage),
    Scroll(ScrollStage),
}

impl Stage {
    pub fn id(&self) -> &str {
        match self {
            Self::TemplateTap(stage) => &stage.id,
            Self::Scroll(stage) => &stage.id,
        }
    }

    pub fn timeout_ms(&self) -> u64 {
        match self {
            Self::TemplateTap(stage) => stage.timeout_ms,
            Self::Scroll(stage) => stage.timeout_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub stages: Vec<Stage>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_priority")]
    pub priority: u32,
}

fn default_stable_frames() -> u32 {
    1
}

fn default_enabled() -> bool {
    true
}

fn default_priority() -> u32 {
    100
}
