//! Event list panel with best-price highlighting.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{best_h2h, Event};
use crate::tui::app::App;
use crate::tui::data::{format_commence, format_price, relative_time, FetchState};
use crate::tui::theme::THEME;
use crate::tui::widgets::pad;

/// Render the event list for the current sport
pub fn render_events(f: &mut Frame, area: Rect, app: &App) {
    let sport = app.sport_key.as_deref().unwrap_or("?");
    let block = Block::default()
        .title(format!(" EVENTS - {sport} "))
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.events {
        FetchState::Idle | FetchState::Loading => {
            f.render_widget(
                Paragraph::new("Loading events...").style(THEME.inactive_style()),
                inner,
            );
        }
        FetchState::Errored(message) => {
            f.render_widget(
                Paragraph::new(message.as_str()).style(THEME.error_style()),
                inner,
            );
        }
        FetchState::Loaded(events) if events.is_empty() => {
            f.render_widget(
                Paragraph::new("No events found.").style(THEME.inactive_style()),
                inner,
            );
        }
        FetchState::Loaded(events) => {
            let header = Line::from(Span::styled(
                format!(
                    "  {} {} {} {}",
                    pad("MATCHUP", 32),
                    pad("STARTS", 18),
                    pad("BEST HOME", 22),
                    "BEST AWAY"
                ),
                Style::default().add_modifier(Modifier::BOLD),
            ));

            // Keep the selected row on screen for long lists
            let visible_rows = (inner.height as usize).saturating_sub(1).max(1);
            let start = app
                .events_selected
                .saturating_sub(visible_rows.saturating_sub(1));
            let end = (start + visible_rows).min(events.len());

            let mut lines = vec![header];
            for (i, event) in events.iter().enumerate().take(end).skip(start) {
                lines.push(event_row(event, i == app.events_selected));
            }

            f.render_widget(Paragraph::new(lines), inner);
        }
    }
}

fn event_row(event: &Event, selected: bool) -> Line<'static> {
    let best = best_h2h(&event.bookmakers);

    let marker = if selected { "> " } else { "  " };
    let matchup_style = if selected {
        THEME.selection_style()
    } else {
        THEME.text_style()
    };

    let matchup = if event.is_live {
        format!("{} [LIVE]", event.matchup())
    } else {
        event.matchup()
    };

    let starts = format!(
        "{} {}",
        format_commence(event.commence_time),
        relative_time(event.commence_time)
    );

    Line::from(vec![
        Span::styled(marker.to_string(), matchup_style),
        Span::styled(pad(&matchup, 32), matchup_style),
        Span::raw(" "),
        Span::styled(pad(&starts, 18), THEME.inactive_style()),
        Span::raw(" "),
        Span::styled(format!("{:>6}", format_price(best.home_best)), THEME.home_style()),
        Span::styled(
            pad(&best.home_bookie.map(|b| format!(" {b}")).unwrap_or_default(), 16),
            THEME.inactive_style(),
        ),
        Span::styled(format!("{:>6}", format_price(best.away_best)), THEME.away_style()),
        Span::styled(
            pad(&best.away_bookie.map(|b| format!(" {b}")).unwrap_or_default(), 16),
            THEME.inactive_style(),
        ),
    ])
}
