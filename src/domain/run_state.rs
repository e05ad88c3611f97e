/// Symbolic keys into the localized string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    StatusRunning,
    StatusStopped,
}

impl LabelKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::StatusRunning => "status_running",
            Self::StatusStopped => "status_stopped",
        }
    }
}

/// The harness run flag. Starts stopped; mutated only through `start`/`stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunState {
    running: bool,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn label_key(self) -> LabelKey {
        if self.running {
            LabelKey::StatusRunning
        } else {
            LabelKey::StatusStopped
        }
    }
}
