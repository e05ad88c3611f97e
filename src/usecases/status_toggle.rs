use crate::domain::{run_state::RunState, string_table::StringTable};

use super::contracts::StatusDisplay;

/// Display surface bound to the TUI status panel: holds the last emitted
/// label for the view to render.
#[derive(Debug, Clone, Default)]
pub struct StatusReadout {
    text: String,
}

impl StatusReadout {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusDisplay for StatusReadout {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }
}

/// Owns the run flag and keeps the bound display surface in sync with it.
///
/// The view layer never touches the flag directly; every mutation goes
/// through `start`/`stop`, and each of the three entry points re-emits the
/// label matching the current state. `initialize` must run exactly once,
/// before the trigger surface is wired up, so the display is never stale.
pub struct StatusToggleController<D: StatusDisplay> {
    state: RunState,
    labels: StringTable,
    display: D,
}

impl<D: StatusDisplay> StatusToggleController<D> {
    pub fn new(labels: StringTable, display: D) -> Self {
        Self {
            state: RunState::default(),
            labels,
            display,
        }
    }

    pub fn initialize(&mut self) {
        self.render();
    }

    pub fn start(&mut self) {
        self.state.start();
        self.render();
    }

    pub fn stop(&mut self) {
        self.state.stop();
        self.render();
    }

    pub fn current_label(&self) -> &str {
        self.labels.get(self.state.label_key())
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn render(&mut self) {
        self.display.set_text(self.labels.get(self.state.label_key()));
    }
}
