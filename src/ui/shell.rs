use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        scenarios = orchestrator.shell().scenario_count(),
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;

    while orchestrator.shell().is_alive() {
        terminal.draw(|frame| {
            view::render(
                frame,
                orchestrator.shell(),
                orchestrator.status_text(),
                orchestrator.is_running(),
            )
        })?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{events::AppEvent, string_table::StringTable},
        infra::stubs::StubFrameFeed,
        ui::event_source::MockEventSource,
        usecases::{
            contracts::{AppEventSource, ShellOrchestrator},
            shell::DefaultShellOrchestrator,
        },
    };

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn orchestrator_shuts_down_on_quit_from_source() {
        let mut source = MockEventSource::from(vec![AppEvent::StartPressed, AppEvent::QuitRequested]);
        let mut orchestrator = DefaultShellOrchestrator::new(
            StringTable::default(),
            None,
            StubFrameFeed::default(),
            10,
        );

        while let Some(event) = source.next_event().expect("must read mock event") {
            orchestrator
                .handle_event(event)
                .expect("must handle mock event");
        }

        assert!(!orchestrator.shell().is_alive());
    }
}
