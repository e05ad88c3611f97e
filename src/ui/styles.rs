//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Style for the status label while the harness is running.
pub fn running_status_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status label while the harness is stopped.
pub fn stopped_status_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Style for engine counters in the scenario panel.
pub fn counter_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for engine event log lines.
pub fn event_log_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for the key hint line.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
