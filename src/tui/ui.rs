//! Screen layout and render dispatch.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::theme::THEME;
use crate::tui::widgets;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header with breadcrumb
        Constraint::Min(8),    // Active screen
        Constraint::Length(1), // Footer status bar
    ])
    .split(f.area());

    render_header(f, chunks[0], app);
    match app.screen {
        Screen::Sports => widgets::render_sports(f, chunks[1], app),
        Screen::Events => widgets::render_events(f, chunks[1], app),
        Screen::Detail => widgets::render_detail(f, chunks[1], app),
    }
    widgets::render_footer(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" ODDSBOARD ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut crumbs = vec![Span::styled("Sports", THEME.text_style())];
    if let Some(sport) = &app.sport_key {
        crumbs.push(Span::styled(" > ", THEME.inactive_style()));
        crumbs.push(Span::styled(sport.clone(), THEME.text_style()));
    }
    if app.screen == Screen::Detail {
        if let Some(detail) = app.detail.data() {
            crumbs.push(Span::styled(" > ", THEME.inactive_style()));
            crumbs.push(Span::styled(detail.matchup(), THEME.highlight_style()));
        }
    }

    f.render_widget(Paragraph::new(Line::from(crumbs)), inner);
}

fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(46, 12, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" KEYS ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    let lines = vec![
        Line::from("  up/down, j/k   move selection"),
        Line::from("  enter          open selection"),
        Line::from("  esc/backspace  back"),
        Line::from("  [ / ]          switch sport in place"),
        Line::from("  r              refresh current screen"),
        Line::from("  m / b / t      market / bookmaker / window"),
        Line::from("  ?              toggle this help"),
        Line::from("  q              quit"),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
