use anyhow::Result;

use crate::{
    domain::{events::AppEvent, shell_state::ShellState, string_table::StringTable},
    engine::ScenarioEngine,
};

use super::{
    contracts::{FrameFeed, ShellOrchestrator},
    status_toggle::{StatusReadout, StatusToggleController},
};

pub struct DefaultShellOrchestrator<F>
where
    F: FrameFeed,
{
    shell: ShellState,
    controller: StatusToggleController<StatusReadout>,
    engine: Option<ScenarioEngine>,
    feed: F,
}

impl<F> DefaultShellOrchestrator<F>
where
    F: FrameFeed,
{
    pub fn new(
        labels: StringTable,
        engine: Option<ScenarioEngine>,
        feed: F,
        log_capacity: usize,
    ) -> Self {
        let scenario_count = engine.as_ref().map_or(0, ScenarioEngine::scenario_count);
        let mut controller =
            StatusToggleController::new(labels, StatusReadout::default());
        controller.initialize();

        Self {
            shell: ShellState::new(scenario_count, log_capacity),
            controller,
            engine,
            feed,
        }
    }

    /// Feeds one frame through the engine, if the toggle is running and a
    /// frame is available. Stopped shells leave the feed untouched.
    fn pump_engine(&mut self) -> Result<()> {
        if !self.controller.is_running() {
            return Ok(());
        }

        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };

        let Some(frame) = self.feed.next_frame()? else {
            return Ok(());
        };

        self.shell.record_frame();
        for record in engine.process(&frame) {
            tracing::debug!(%record, "engine event");
            self.shell.push_log(record.to_string());
        }

        Ok(())
    }
}

impl<F> ShellOrchestrator for DefaultShellOrchestrator<F>
where
    F: FrameFeed,
{
    fn shell(&self) -> &ShellState {
        &self.shell
    }

    fn status_text(&self) -> &str {
        self.controller.display().text()
    }

    fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => self.pump_engine()?,
            AppEvent::StartPressed => {
                self.controller.start();
                tracing::info!(label = self.controller.current_label(), "start pressed");
            }
            AppEvent::StopPressed => {
                self.controller.stop();
                tracing::info!(label = self.controller.current_label(), "stop pressed");
            }
            AppEvent::QuitRequested => self.shell.quit(),
        }

        Ok(())
    }
}
