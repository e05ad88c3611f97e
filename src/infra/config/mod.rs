pub mod app_config;
pub mod file_config;
pub mod loader;

pub use app_config::{AppConfig, EngineConfig, LabelConfig, LogConfig};
pub use loader::load;
