use std::path::Path;

use crate::{
    domain::string_table::StringTable,
    engine::ScenarioEngine,
    infra::{
        self,
        error::AppError,
        scenario_file::{self, FileFrameFeed},
    },
    usecases::{context::AppContext, shell::DefaultShellOrchestrator},
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;

    Ok(AppContext::new(config))
}

pub fn compose_shell(
    context: &AppContext,
) -> Result<DefaultShellOrchestrator<FileFrameFeed>, AppError> {
    let engine_config = &context.config.engine;

    let engine = match engine_config.scenario_file.as_deref() {
        Some(path) => {
            let scenarios = scenario_file::load_scenarios(path)?;
            tracing::info!(
                path = %path.display(),
                scenarios = scenarios.len(),
                seed = engine_config.seed,
                "scenario engine loaded"
            );
            Some(ScenarioEngine::new(scenarios, engine_config.seed))
        }
        None => None,
    };

    let feed = match engine_config.frames_file.as_deref() {
        Some(path) => FileFrameFeed::from_file(path)?,
        None => FileFrameFeed::empty(),
    };

    let labels = StringTable::new(
        context.config.labels.status_running.clone(),
        context.config.labels.status_stopped.clone(),
    );

    Ok(DefaultShellOrchestrator::new(
        labels,
        engine,
        feed,
        engine_config.event_log_capacity,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::contracts::ShellOrchestrator;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        assert_eq!(context.config, crate::infra::config::AppConfig::default());
    }

    #[test]
    fn build_context_reads_values_from_an_explicit_config_file() {
        let temp_dir = tempfile::tempdir().expect("temp dir must be created");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[labels]\nstatus_running = \"Live\"\n")
            .expect("must write test config");

        let context = build_context(Some(&config_path)).expect("context should build from file");

        assert_eq!(context.config.labels.status_running, "Live");
        assert_eq!(context.config.labels.status_stopped, "Stopped");
    }

    #[test]
    fn composes_a_shell_without_an_engine_when_no_scenario_file_is_set() {
        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        let orchestrator = compose_shell(&context).expect("shell should compose");

        assert_eq!(orchestrator.shell().scenario_count(), 0);
        assert_eq!(orchestrator.status_text(), "Stopped");
    }

    #[test]
    fn composed_shell_uses_configured_labels() {
        let mut context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");
        context.config.labels.status_stopped = "Idle".to_owned();

        let orchestrator = compose_shell(&context).expect("shell should compose");

        assert_eq!(orchestrator.status_text(), "Idle");
    }
}
