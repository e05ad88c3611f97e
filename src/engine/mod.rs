//! Engine layer: frame-driven scenario arbitration.

pub mod events;
pub mod scenario_engine;

pub use scenario_engine::ScenarioEngine;

/// Returns the engine module name for smoke checks.
pub fn module_name() -> &'static str {
    "engine"
}
