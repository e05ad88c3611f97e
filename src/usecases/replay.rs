use crate::{
    domain::{frame::FrameSnapshot, scenario::Scenario},
    engine::{events::EventRecord, ScenarioEngine},
};

pub struct ReplayOutcome {
    pub frames_processed: usize,
    pub records: Vec<EventRecord>,
}

/// Runs the engine over a recorded frame sequence, collecting every emitted
/// record in order.
pub fn replay(scenarios: Vec<Scenario>, frames: &[FrameSnapshot], seed: u64) -> ReplayOutcome {
    let mut engine = ScenarioEngine::new(scenarios, seed);
    let mut records = Vec::new();

    for frame in frames {
        records.extend(engine.process(frame));
    }

    ReplayOutcome {
        frames_processed: frames.len(),
        records,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        domain::{
            frame::TemplateMatch,
            geometry::{DelayRange, Rect},
            scenario::{Stage, TemplateTapStage},
        },
        engine::events::EngineEvent,
    };

    fn scenario() -> Scenario {
        Scenario {
            id: "s1".to_owned(),
            name: "Primary".to_owned(),
            stages: vec![Stage::TemplateTap(TemplateTapStage {
                id: "s1-1".to_owned(),
                timeout_ms: 1_000,
                search_region: Rect {
                    x: 0,
                    y: 0,
                    width: 500,
                    height: 500,
                },
                delay_before_tap: DelayRange::new(10, 40).expect("bounds are valid"),
                click_jitter_px: 5,
                threshold: 0.8,
                stable_frames_required: 1,
            })],
            enabled: true,
            priority: 1,
        }
    }

    fn matching_frame(timestamp_ms: u64) -> FrameSnapshot {
        let mut matches_by_stage = HashMap::new();
        matches_by_stage.insert(
            "s1-1".to_owned(),
            TemplateMatch {
                stage_id: "s1-1".to_owned(),
                confidence: 0.9,
                matched_region: Rect {
                    x: 100,
                    y: 100,
                    width: 60,
                    height: 30,
                },
            },
        );

        FrameSnapshot {
            timestamp_ms,
            matches_by_stage,
        }
    }

    #[test]
    fn collects_records_across_the_whole_sequence() {
        let frames = [matching_frame(100), matching_frame(150)];

        let outcome = replay(vec![scenario()], &frames, 42);

        assert_eq!(outcome.frames_processed, 2);
        let events: Vec<EngineEvent> = outcome.records.iter().map(|r| r.event).collect();
        assert_eq!(
            events,
            [
                EngineEvent::ScenarioActivated,
                EngineEvent::StageCompleted,
                EngineEvent::TapScheduled,
                EngineEvent::ScenarioCompleted
            ]
        );
    }

    #[test]
    fn empty_frame_sequence_yields_no_records() {
        let outcome = replay(vec![scenario()], &[], 42);

        assert_eq!(outcome.frames_processed, 0);
        assert!(outcome.records.is_empty());
    }
}
