use anyhow::Result;

use crate::domain::{events::AppEvent, frame::FrameSnapshot, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

/// Text-rendering target for the status label. Emission cannot fail.
pub trait StatusDisplay {
    fn set_text(&mut self, text: &str);
}

/// Source of capture frames for the scenario engine.
pub trait FrameFeed {
    fn next_frame(&mut self) -> Result<Option<FrameSnapshot>>;
}

pub trait ShellOrchestrator {
    fn shell(&self) -> &ShellState;
    fn status_text(&self) -> &str;
    fn is_running(&self) -> bool;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
