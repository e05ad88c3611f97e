use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, EngineConfig, LabelConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub labels: Option<FileLabelConfig>,
    pub engine: Option<FileEngineConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(labels) = self.labels {
            labels.merge_into(&mut config.labels);
        }

        if let Some(engine) = self.engine {
            engine.merge_into(&mut config.engine);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLabelConfig {
    pub status_running: Option<String>,
    pub status_stopped: Option<String>,
}

impl FileLabelConfig {
    fn merge_into(self, config: &mut LabelConfig) {
        if let Some(status_running) = self.status_running {
            config.status_running = status_running;
        }

        if let Some(status_stopped) = self.status_stopped {
            config.status_stopped = status_stopped;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileEngineConfig {
    pub seed: Option<u64>,
    pub scenario_file: Option<PathBuf>,
    pub frames_file: Option<PathBuf>,
    pub event_log_capacity: Option<usize>,
}

impl FileEngineConfig {
    fn merge_into(self, config: &mut EngineConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        if let Some(scenario_file) = self.scenario_file {
            config.scenario_file = Some(scenario_file);
        }

        if let Some(frames_file) = self.frames_file {
            config.frames_file = Some(frames_file);
        }

        if let Some(event_log_capacity) = self.event_log_capacity {
            config.event_log_capacity = event_log_capacity;
        }
    }
}
