/// Mutable state of the TUI shell: liveness, engine counters, and a bounded
/// log of rendered engine events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    alive: bool,
    scenario_count: usize,
    frames_processed: u64,
    event_log: Vec<String>,
    log_capacity: usize,
}

impl ShellState {
    pub fn new(scenario_count: usize, log_capacity: usize) -> Self {
        Self {
            alive: true,
            scenario_count,
            frames_processed: 0,
            event_log: Vec::new(),
            log_capacity: log_capacity.max(1),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn quit(&mut self) {
        self.alive = false;
    }

    pub fn scenario_count(&self) -> usize {
        self.scenario_count
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn record_frame(&mut self) {
        self.frames_processed += 1;
    }

    pub fn event_log(&self) -> &[String] {
        &self.event_log
    }

    /// Appends a log line, dropping the oldest lines beyond capacity.
    pub fn push_log(&mut self, line: String) {
        self.event_log.push(line);
        if self.event_log.len() > self.log_capacity {
            let overflow = self.event_log.len() - self.log_capacity;
            self.event_log.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_alive_with_zero_counters() {
        let state = ShellState::new(2, 10);

        assert!(state.is_alive());
        assert_eq!(state.scenario_count(), 2);
        assert_eq!(state.frames_processed(), 0);
        assert!(state.event_log().is_empty());
    }

    #[test]
    fn quit_flips_liveness() {
        let mut state = ShellState::new(0, 10);

        state.quit();

        assert!(!state.is_alive());
    }

    #[test]
    fn log_is_trimmed_to_capacity_from_the_front() {
        let mut state = ShellState::new(0, 3);

        for n in 1..=5 {
            state.push_log(format!("line {n}"));
        }

        assert_eq!(state.event_log(), ["line 3", "line 4", "line 5"]);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut state = ShellState::new(0, 0);

        state.push_log("first".to_owned());
        state.push_log("second".to_owned());

        assert_eq!(state.event_log(), ["second"]);
    }
}
