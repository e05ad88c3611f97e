use std::collections::HashMap;

use nanorand::{Rng, WyRand};

use crate::domain::{
    frame::FrameSnapshot,
    geometry::Point,
    scenario::{Scenario, ScrollDirection, ScrollStage, Stage, TemplateTapStage},
};

use super::events::{ActionPayload, EngineEvent, EventRecord};

#[derive(Debug, Clone, Copy)]
struct ActiveStage {
    scenario_idx: usize,
    stage_idx: usize,
    stage_start_ms: u64,
}

/// Core arbitration engine: at most one scenario active at a time.
///
/// Disabled scenarios are dropped at construction; the rest are tried for
/// activation in ascending priority order. All randomness (jitter, delays,
/// scroll geometry) comes from one seeded generator, so a given scenario
/// set, seed, and frame sequence always yields the same event sequence.
pub struct ScenarioEngine {
    scenarios: Vec<Scenario>,
    rng: WyRand,
    active: Option<ActiveStage>,
    stable_hits: HashMap<String, u32>,
}

impl ScenarioEngine {
    pub fn new(scenarios: Vec<Scenario>, seed: u64) -> Self {
        let mut scenarios: Vec<Scenario> =
            scenarios.into_iter().filter(|s| s.enabled).collect();
        scenarios.sort_by_key(|s| s.priority);

        Self {
            scenarios,
            rng: WyRand::new_seed(seed),
            active: None,
            stable_hits: HashMap::new(),
        }
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    pub fn active_scenario_id(&self) -> Option<&str> {
        self.active
            .map(|active| self.scenarios[active.scenario_idx].id.as_str())
    }

    pub fn process(&mut self, frame: &FrameSnapshot) -> Vec<EventRecord> {
        match self.active {
            None => self.try_activate(frame),
            Some(active) => self.process_active(frame, active),
        }
    }

    fn try_activate(&mut self, frame: &FrameSnapshot) -> Vec<EventRecord> {
        for idx in 0..self.scenarios.len() {
            // Only scenarios led by a template-tap stage can self-activate.
            let first = match self.scenarios[idx].stages.first() {
                Some(Stage::TemplateTap(stage)) => stage.clone(),
                _ => continue,
            };

            if self.is_match(frame, &first) {
                self.active = Some(ActiveStage {
                    scenario_idx: idx,
                    stage_idx: 0,
                    stage_start_ms: frame.timestamp_ms,
                });
                self.stable_hits.clear();
                return vec![EventRecord::new(
                    EngineEvent::ScenarioActivated,
                    self.scenarios[idx].id.clone(),
                )];
            }
        }

        Vec::new()
    }

    fn process_active(&mut self, frame: &FrameSnapshot, active: ActiveStage) -> Vec<EventRecord> {
        let scenario_id = self.scenarios[active.scenario_idx].id.clone();
        let stage = self.scenarios[active.scenario_idx].stages[active.stage_idx].clone();

        if frame.timestamp_ms.saturating_sub(active.stage_start_ms) > stage.timeout_ms() {
            let stage_id = stage.id().to_owned();
            self.reset();
            return vec![EventRecord::with_stage(
                EngineEvent::ScenarioTimeout,
                scenario_id,
                stage_id,
            )];
        }

        match stage {
            Stage::TemplateTap(tap) => self.process_tap_stage(frame, active, scenario_id, &tap),
            Stage::Scroll(scroll) => self.process_scroll_stage(frame, active, scenario_id, &scroll),
        }
    }

    fn process_tap_stage(
        &mut self,
        frame: &FrameSnapshot,
        active: ActiveStage,
        scenario_id: String,
        stage: &TemplateTapStage,
    ) -> Vec<EventRecord> {
        if !self.is_match(frame, stage) {
            return Vec::new();
        }

        let Some(matched) = frame.match_for(&stage.id) else {
            return Vec::new();
        };

        let center = matched.matched_region.center();
        let point = Point {
            x: self.jittered(center.x, stage.click_jitter_px),
            y: self.jittered(center.y, stage.click_jitter_px),
        };
        let region = stage.search_region;
        let point = Point {
            x: point.x.max(region.x).min(region.max_x()),
            y: point.y.max(region.y).min(region.max_y()),
        };

        let payload = ActionPayload::Tap {
            point,
            delay_ms: stage.delay_before_tap.sample(&mut self.rng),
        };
        self.advance(
            active,
            frame.timestamp_ms,
            EventRecord::with_payload(
                EngineEvent::TapScheduled,
                scenario_id,
                stage.id.clone(),
                payload,
            ),
        )
    }

    fn process_scroll_stage(
        &mut self,
        frame: &FrameSnapshot,
        active: ActiveStage,
        scenario_id: String,
        stage: &ScrollStage,
    ) -> Vec<EventRecord> {
        let region = stage.region;
        let from = region.random_point(&mut self.rng);
        let distance = self
            .rng
            .generate_range(stage.distance_px_min..=stage.distance_px_max)
            as i32;

        let to = match stage.direction {
            ScrollDirection::Up => Point {
                x: from.x,
                y: from.y.saturating_sub(distance).max(region.y),
            },
            ScrollDirection::Down => Point {
                x: from.x,
                y: from.y.saturating_add(distance).min(region.max_y()),
            },
            ScrollDirection::Left => Point {
                x: from.x.saturating_sub(distance).max(region.x),
                y: from.y,
            },
            ScrollDirection::Right => Point {
                x: from.x.saturating_add(distance).min(region.max_x()),
                y: from.y,
            },
        };

        let payload = ActionPayload::Scroll {
            from,
            to,
            duration_ms: self
                .rng
                .generate_range(stage.duration_ms_min..=stage.duration_ms_max),
        };
        self.advance(
            active,
            frame.timestamp_ms,
            EventRecord::with_payload(
                EngineEvent::ScrollScheduled,
                scenario_id,
                stage.id.clone(),
                payload,
            ),
        )
    }

    fn advance(
        &mut self,
        active: ActiveStage,
        timestamp_ms: u64,
        action: EventRecord,
    ) -> Vec<EventRecord> {
        let scenario = &self.scenarios[active.scenario_idx];
        let scenario_id = scenario.id.clone();
        let stage_id = scenario.stages[active.stage_idx].id().to_owned();
        let is_last = active.stage_idx + 1 >= scenario.stages.len();

        let mut events = vec![
            EventRecord::with_stage(EngineEvent::StageCompleted, scenario_id.clone(), stage_id),
            action,
        ];

        if is_last {
            events.push(EventRecord::new(EngineEvent::ScenarioCompleted, scenario_id));
            self.reset();
        } else {
            self.active = Some(ActiveStage {
                scenario_idx: active.scenario_idx,
                stage_idx: active.stage_idx + 1,
                stage_start_ms: timestamp_ms,
            });
            self.stable_hits.clear();
        }

        events
    }

    /// A stage matches once its template is seen at or above threshold for
    /// `stable_frames_required` consecutive frames; any miss resets the streak.
    fn is_match(&mut self, frame: &FrameSnapshot, stage: &TemplateTapStage) -> bool {
        let seen = frame
            .match_for(&stage.id)
            .is_some_and(|m| m.confidence >= stage.threshold);

        if !seen {
            self.stable_hits.insert(stage.id.clone(), 0);
            return false;
        }

        let hits = self.stable_hits.entry(stage.id.clone()).or_insert(0);
        *hits += 1;
        *hits >= stage.stable_frames_required
    }

    fn jittered(&mut self, value: i32, jitter_px: u32) -> i32 {
        let offset = self.rng.generate_range(0..=u64::from(jitter_px) * 2) as i32;
        value.saturating_add(offset).saturating_sub(jitter_px as i32)
    }

    fn reset(&mut self) {
        self.active = None;
        self.stable_hits.clear();
    }
}
