//! Domain layer: core entities and business rules.

pub mod events;
pub mod frame;
pub mod geometry;
pub mod run_state;
pub mod scenario;
pub mod shell_state;
pub mod string_table;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
