//! Right panel: selected section.
//!
//! Dispatches to the panel bound to the selected navigation entry.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::domain::App;

use super::panels;

/// Render the right panel (selected section).
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let entry = app.selected_entry();

    // Container block titled with the entry's label
    let block = Block::default()
        .title(format!(" {} ", entry.display))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    panels::render(frame, inner_area, entry.target, app);
}
