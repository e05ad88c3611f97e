use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMatch {
    pub stage_id: String,
    pub confidence: f64,
    pub matched_region: Rect,
}

/// One processed capture frame: a timestamp plus the template matches found
/// in it, keyed by stage id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub timestamp_ms: u64,
    #[serde(default)]
    pub matches_by_stage: HashMap<String, TemplateMatch>,
}

impl FrameSnapshot {
    pub fn match_for(&self, stage_id: &str) -> Option<&TemplateMatch> {
        self.matches_by_stage.get(stage_id)
    }
}
