//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_area = centered_rect(60, 70, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "SNUBA-ADMIN HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        key_line("  1-9    ", "Select section by position"),
        key_line("  ↑/↓ j/k", "Move through the section list"),
        key_line("  [ / ]  ", "Previous / next query (ClickHouse)"),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Actions",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        key_line("  R      ", "Re-fetch the selected panel"),
        key_line("  Q/Esc  ", "Quit"),
        key_line("  ?      ", "Toggle this help"),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Markers",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  ●      ", Style::default().fg(Color::Green)),
            Span::raw("Data loaded"),
        ]),
        Line::from(vec![
            Span::styled("  ●      ", Style::default().fg(Color::Red)),
            Span::raw("Last request failed"),
        ]),
        Line::from(vec![
            Span::styled("  ○      ", Style::default().fg(Color::DarkGray)),
            Span::raw("Section under construction"),
        ]),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
