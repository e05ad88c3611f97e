use anyhow::Result;

use crate::{
    domain::frame::FrameSnapshot,
    usecases::contracts::{FrameFeed, StatusDisplay},
};

/// Display surface that records every emission, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    pub emissions: Vec<String>,
}

impl StatusDisplay for RecordingDisplay {
    fn set_text(&mut self, text: &str) {
        self.emissions.push(text.to_owned());
    }
}

#[derive(Debug, Default)]
pub struct StubFrameFeed {
    frames: std::collections::VecDeque<FrameSnapshot>,
}

impl StubFrameFeed {
    pub fn from_frames(frames: Vec<FrameSnapshot>) -> Self {
        Self {
            frames: frames.into(),
        }
    }
}

impl FrameFeed for StubFrameFeed {
    fn next_frame(&mut self) -> Result<Option<FrameSnapshot>> {
        Ok(self.frames.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_display_keeps_emission_order() {
        let mut display = RecordingDisplay::default();

        display.set_text("Stopped");
        display.set_text("Running");

        assert_eq!(display.emissions, ["Stopped", "Running"]);
    }
}
