//! Left panel: navigation list.
//!
//! ```text
//! ┌──────────────────────┐
//! │   NAVIGATION         │
//! │                      │
//! │  [1] Overview      ○ │
//! │  [2] Runtime config  │
//! │  ...                 │
//! └──────────────────────┘
//! ```
//!
//! One row per registry entry, in registry order. Placeholder sections are
//! dimmed and marked with `○`.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::domain::{hotkey_for, App, LoadState, NavTarget, PanelKind};

/// Render the navigation list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .registry
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let hotkey = hotkey_for(index).map(String::from).unwrap_or("-".to_string());
            let is_selected = index == app.selected;

            let text_style = if entry.is_placeholder() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };

            // Highlight selected
            let line_style = if is_selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let spans = vec![
                Span::styled(format!("[{}] ", hotkey), text_style),
                Span::styled(format!("{} ", entry.display), text_style),
                status_marker(entry.target, app),
            ];

            ListItem::new(Line::from(spans)).style(line_style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" NAVIGATION ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}

/// Marker showing a section's load state.
fn status_marker(target: NavTarget, app: &App) -> Span<'static> {
    let (failed, loaded, loading) = match target {
        NavTarget::Placeholder => {
            return Span::styled("○", Style::default().fg(Color::DarkGray));
        }
        NavTarget::Panel(PanelKind::RuntimeConfig) => flags(&app.configs),
        NavTarget::Panel(PanelKind::ClickhouseQueries) => flags(&app.queries),
    };

    if failed {
        Span::styled("●", Style::default().fg(Color::Red))
    } else if loading {
        Span::styled("…", Style::default().fg(Color::Yellow))
    } else if loaded {
        Span::styled("●", Style::default().fg(Color::Green))
    } else {
        Span::raw("")
    }
}

fn flags<T>(state: &LoadState<T>) -> (bool, bool, bool) {
    (
        matches!(state, LoadState::Failed(_)),
        matches!(state, LoadState::Loaded(_)),
        state.is_loading(),
    )
}
