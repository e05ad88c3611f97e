use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineEvent {
    ScenarioActivated,
    TapScheduled,
    ScrollScheduled,
    StageCompleted,
    ScenarioCompleted,
    ScenarioTimeout,
}

impl EngineEvent {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::ScenarioActivated => "SCENARIO_ACTIVATED",
            Self::TapScheduled => "TAP_SCHEDULED",
            Self::ScrollScheduled => "SCROLL_SCHEDULED",
            Self::StageCompleted => "STAGE_COMPLETED",
            Self::ScenarioCompleted => "SCENARIO_COMPLETED",
            Self::ScenarioTimeout => "SCENARIO_TIMEOUT",
        }
    }
}

/// Concrete gesture scheduled by the engine, attached to the emitting record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionPayload {
    Tap { point: Point, delay_ms: u64 },
    Scroll { from: Point, to: Point, duration_ms: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event: EngineEvent,
    pub scenario_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stage_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payload: Option<ActionPayload>,
}

impl EventRecord {
    pub fn new(event: EngineEvent, scenario_id: impl Into<String>) -> Self {
        Self {
            event,
            scenario_id: scenario_id.into(),
            stage_id: None,
            payload: None,
        }
    }

    pub fn with_stage(
        event: EngineEvent,
        scenario_id: impl Into<String>,
        stage_id: impl Into<String>,
    ) -> Self {
        Self {
            stage_id: Some(stage_id.into()),
            ..Self::new(event, scenario_id)
        }
    }

    pub fn with_payload(
        event: EngineEvent,
        scenario_id: impl Into<String>,
        stage_id: impl Into<String>,
        payload: ActionPayload,
    ) -> Self {
        Self {
            payload: Some(payload),
            ..Self::with_stage(event, scenario_id, stage_id)
        }
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.event.as_label(), self.scenario_id)?;
        if let Some(stage_id) = &self.stage_id {
            write!(f, "/{stage_id}")?;
        }
        match self.payload {
            Some(ActionPayload::Tap { point, delay_ms }) => {
                write!(f, " tap ({}, {}) after {delay_ms} ms", point.x, point.y)
            }
            Some(ActionPayload::Scroll {
                from,
                to,
                duration_ms,
            }) => write!(
                f,
                " ({}, {}) -> ({}, {}) over {duration_ms} ms",
                from.x, from.y, to.x, to.y
            ),
            None => Ok(()),
        }
    }
}
