//! Per-section panel renderers.
//!
//! Each data-backed panel has its own renderer file. Placeholder sections
//! render nothing.

mod clickhouse_queries;
mod runtime_config;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::domain::{App, LoadState, NavTarget, PanelKind};

/// Dispatch to the renderer for `target`.
pub fn render(frame: &mut Frame, area: Rect, target: NavTarget, app: &App) {
    match target {
        NavTarget::Panel(PanelKind::RuntimeConfig) => runtime_config::render(frame, area, app),
        NavTarget::Panel(PanelKind::ClickhouseQueries) => {
            clickhouse_queries::render(frame, area, app)
        }
        NavTarget::Placeholder => {}
    }
}

/// Render the non-loaded states shared by every panel.
///
/// Returns the loaded data when there is something to draw.
fn loaded_or_status<'a, T>(frame: &mut Frame, area: Rect, state: &'a LoadState<T>) -> Option<&'a T> {
    let (text, color) = match state {
        LoadState::Loaded(data) => return Some(data),
        LoadState::Idle => ("Not loaded. Press R to fetch.".to_string(), Color::DarkGray),
        LoadState::Loading => ("Loading…".to_string(), Color::Yellow),
        LoadState::Failed(message) => (format!("Request failed: {}", message), Color::Red),
    };

    let paragraph = Paragraph::new(vec![Line::raw(""), Line::styled(text, Style::default().fg(color))])
        .centered();
    frame.render_widget(paragraph, area);
    None
}
