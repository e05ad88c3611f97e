//! Infrastructure layer: adapters for config, logging, and data files.

pub mod config;
pub mod error;
pub mod logging;
pub mod scenario_file;
#[cfg(test)]
pub mod stubs;

/// Returns the infra module name for smoke checks.
pub fn module_name() -> &'static str {
    "infra"
}
