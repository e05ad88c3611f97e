use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub labels: LabelConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

/// Status labels shown on the display surface, keyed like a string resource
/// table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelConfig {
    pub status_running: String,
    pub status_stopped: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            status_running: "Running".to_owned(),
            status_stopped: "Stopped".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed: u64,
    pub scenario_file: Option<PathBuf>,
    pub frames_file: Option<PathBuf>,
    pub event_log_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scenario_file: None,
            frames_file: None,
            event_log_capacity: 100,
        }
    }
}
