use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let temp_dir = tempfile::tempdir().expect("temp dir must be created");
        let config_path = temp_dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[logging]
level = "debug"

[labels]
status_running = "Engine running"

[engine]
seed = 7
scenario_file = "scenarios.json"
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.labels.status_running, "Engine running");
        assert_eq!(config.labels.status_stopped, "Stopped");
        assert_eq!(config.engine.seed, 7);
        assert_eq!(
            config.engine.scenario_file.as_deref(),
            Some(Path::new("scenarios.json"))
        );
        assert_eq!(config.engine.frames_file, None);
        assert_eq!(config.engine.event_log_capacity, 100);
    }

    #[test]
    fn surfaces_parse_errors_with_the_offending_path() {
        let temp_dir = tempfile::tempdir().expect("temp dir must be created");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "not valid toml [").expect("must write test config");

        let error = load(Some(&config_path)).expect_err("invalid config must fail");

        match error {
            AppError::ConfigParse { path, .. } => assert_eq!(path, config_path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
