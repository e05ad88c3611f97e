use super::run_state::LabelKey;

/// Localized status labels, looked up by symbolic key. The table does not
/// interpret label content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    running: String,
    stopped: String,
}

impl StringTable {
    pub fn new(running: impl Into<String>, stopped: impl Into<String>) -> Self {
        Self {
            running: running.into(),
            stopped: stopped.into(),
        }
    }

    pub fn get(&self, key: LabelKey) -> &str {
        match key {
            LabelKey::StatusRunning => &self.running,
            LabelKey::StatusStopped => &self.stopped,
        }
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new("Running", "Stopped")
    }
}
