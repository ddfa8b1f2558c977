//! ClickHouse system queries panel renderer.
//!
//! Displays:
//! - Query list in backend order, with the cursor highlighted
//! - Detail of the highlighted query: description and SQL text

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::api::SystemQuery;
use crate::domain::App;

/// Render the ClickHouse queries panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(queries) = super::loaded_or_status(frame, area, &app.queries) else {
        return;
    };

    if queries.is_empty() {
        frame.render_widget(
            Line::styled("  No system queries defined.", Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Query list
            Constraint::Min(6),         // Detail
        ])
        .split(area);

    let cursor = app.query_cursor.min(queries.len() - 1);
    render_list(frame, chunks[0], queries, cursor);
    render_detail(frame, chunks[1], &queries[cursor]);
}

fn render_list(frame: &mut Frame, area: Rect, queries: &[SystemQuery], cursor: usize) {
    let items: Vec<ListItem> = queries
        .iter()
        .enumerate()
        .map(|(index, query)| {
            let style = if index == cursor {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![Span::styled(
                format!(" {:<28}", query.name),
                Style::default().fg(Color::Cyan),
            )];
            if let Some(description) = &query.description {
                spans.push(Span::styled(
                    description.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Queries ({}) ", queries.len()))
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

fn render_detail(frame: &mut Frame, area: Rect, query: &SystemQuery) {
    let description = match &query.description {
        Some(text) => Line::raw(text.clone()),
        None => Line::styled("(no description)", Style::default().fg(Color::DarkGray)),
    };

    let mut text = vec![description, Line::raw("")];
    text.extend(
        query
            .sql
            .lines()
            .map(|line| Line::styled(line.to_string(), Style::default().fg(Color::Green))),
    );

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", query.name))
                .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}
