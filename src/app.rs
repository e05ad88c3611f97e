use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, engine, infra, ui,
    usecases::{self, bootstrap, replay::replay},
};

pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        engine = engine::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            let mut orchestrator = bootstrap::compose_shell(&context)?;
            let mut event_source = ui::CrosstermEventSource::default();

            ui::shell::start(&context, &mut event_source, &mut orchestrator)?;
        }
        Command::Replay { scenarios, frames } => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            let scenarios = infra::scenario_file::load_scenarios(&scenarios)?;
            let frames = infra::scenario_file::load_frames(&frames)?;

            let outcome = replay(scenarios, &frames, context.config.engine.seed);
            tracing::info!(
                frames = outcome.frames_processed,
                events = outcome.records.len(),
                "replay completed"
            );

            for record in &outcome.records {
                println!("{}", serde_json::to_string(record)?);
            }
        }
    }

    Ok(())
}
