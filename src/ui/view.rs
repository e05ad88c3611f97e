use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::domain::shell_state::ShellState;

use super::styles;

const HINT_LINE: &str = " s start · x stop · q quit";

pub fn render(frame: &mut Frame<'_>, state: &ShellState, status_text: &str, running: bool) {
    let [status_area, content_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    let [scenario_area, log_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .areas(content_area);

    render_status_panel(frame, status_area, status_text, running);
    render_scenario_panel(frame, scenario_area, state);
    render_event_log(frame, log_area, state);

    let hints = Paragraph::new(HINT_LINE).style(styles::hint_style());
    frame.render_widget(hints, hint_area);
}

fn render_status_panel(frame: &mut Frame<'_>, area: Rect, status_text: &str, running: bool) {
    let style = if running {
        styles::running_status_style()
    } else {
        styles::stopped_status_style()
    };

    let status = Paragraph::new(status_text)
        .style(style)
        .block(Block::default().title("Status").borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn render_scenario_panel(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let lines: Vec<Line<'_>> = scenario_summary_lines(state)
        .into_iter()
        .map(Line::from)
        .collect();

    let panel = Paragraph::new(lines)
        .style(styles::counter_style())
        .block(Block::default().title("Engine").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_event_log(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    // Inner height = area height - 2 (borders); show the newest lines.
    let visible = area.height.saturating_sub(2) as usize;
    let log = state.event_log();
    let start = log.len().saturating_sub(visible);

    let items: Vec<ListItem<'_>> = log[start..]
        .iter()
        .map(|line| ListItem::new(line.as_str()))
        .collect();

    let title = format!("Engine events ({})", log.len());
    let list = List::new(items)
        .style(styles::event_log_style())
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn scenario_summary_lines(state: &ShellState) -> Vec<String> {
    if state.scenario_count() == 0 {
        return vec!["No scenarios loaded".to_owned()];
    }

    vec![
        format!("Scenarios: {}", state.scenario_count()),
        format!("Frames fed: {}", state.frames_processed()),
    ]
}
