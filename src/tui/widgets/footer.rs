//! Footer status bar: key hints for the active screen plus fetch status.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::theme::THEME;

/// Render the footer status bar
pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.screen {
        Screen::Sports => "enter: events   r: refresh   ?: help   q: quit",
        Screen::Events => "enter: detail   [/]: switch sport   r: refresh   esc: back   q: quit",
        Screen::Detail => "m: market   b: bookmaker   t: window   r: refresh   esc: back   q: quit",
    };

    let busy = app.sports.is_loading() || app.events.is_loading()
        || app.detail.is_loading() || app.history.is_loading();

    let mut spans = vec![
        Span::raw("  "),
        Span::styled(hints, THEME.inactive_style()),
        Span::raw("   "),
    ];

    if busy {
        spans.push(Span::styled("[LOADING]", THEME.highlight_style()));
    } else if let Some(updated) = app.last_update {
        spans.push(Span::styled(
            format!("updated {}", updated.format("%H:%M:%S")),
            THEME.inactive_style(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
