//! Main layout orchestration.
//!
//! Renders the overall console structure:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  SNUBA-ADMIN v0.1.0                     [R]efresh [Q]uit [?]Help│
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  NAVIGATION            │  SELECTED PANEL                        │
//! │  [1] Overview          │  ...                                   │
//! │  [2] Runtime config    │                                        │
//! │  ...                   │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! │  [1-9] Select   [↑↓] Navigate   [R] Refresh   [?] Help          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState};

use super::{nav_panel, right_panel, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main vertical layout: header, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    render_body(frame, main_chunks[1], app);
    render_footer(frame, main_chunks[2]);

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame);
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut title = vec![
        Span::styled(
            " SNUBA-ADMIN ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if app.demo {
        title.push(Span::styled(" [DEMO]", Style::default().fg(Color::Magenta)));
    }

    // Show last refresh time or error
    let status = if let Some(err) = &app.error_message {
        Span::styled(format!(" ⚠ {} ", err), Style::default().fg(Color::Red))
    } else if let Some(time) = app.last_refresh {
        Span::styled(
            format!(" Last refresh: {} ", time.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(" No data ", Style::default().fg(Color::DarkGray))
    };

    let hints = vec![
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw("efresh "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
    ];

    let title_len: usize = title.iter().map(|s| s.width()).sum();
    let hints_len: usize = hints.iter().map(|s| s.width()).sum();
    let padding = area
        .width
        .saturating_sub(2)
        .saturating_sub((title_len + status.width() + hints_len) as u16);

    let mut spans = title;
    spans.push(status);
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Render the main body (navigation + selected panel).
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28), // Navigation list
            Constraint::Min(40),    // Selected panel
        ])
        .split(area);

    nav_panel::render(frame, body_chunks[0], app);
    right_panel::render(frame, body_chunks[1], app);
}

/// Render the footer with keyboard shortcuts.
fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = vec![
        Span::styled("[1-9]", Style::default().fg(Color::Yellow)),
        Span::raw(" Select  "),
        Span::styled("[↑↓]", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("[ [ ] ]", Style::default().fg(Color::Yellow)),
        Span::raw(" Query  "),
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw(" Refresh  "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
    ];

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
