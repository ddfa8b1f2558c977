//! Runtime config panel renderer.
//!
//! Displays every runtime config as a key / value / type table, sorted by key.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Row, Table},
    Frame,
};

use crate::api::{sorted_entries, ConfigValue};
use crate::domain::App;

/// Render the runtime config panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(configs) = super::loaded_or_status(frame, area, &app.configs) else {
        return;
    };

    if configs.is_empty() {
        frame.render_widget(
            Line::styled("  No runtime configs set.", Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let rows: Vec<Row> = sorted_entries(configs)
        .into_iter()
        .map(|entry| {
            let value_style = match entry.value {
                ConfigValue::Number(_) => Style::default().fg(Color::Cyan),
                ConfigValue::Text(_) => Style::default().fg(Color::Green),
            };
            Row::new(vec![
                Line::raw(entry.key),
                Line::styled(entry.value.to_string(), value_style),
                Line::styled(entry.value.kind(), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Key", "Value", "Type"]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(38),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .column_spacing(2);

    frame.render_widget(table, area);
}
