//! Event detail panel: latest odds per bookmaker plus the history chart.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{best_h2h, BestH2h, BookmakerOdds};
use crate::tui::app::App;
use crate::tui::data::{format_commence, format_price, format_price_point, relative_time, FetchState};
use crate::tui::theme::THEME;
use crate::tui::widgets::{chart, pad};

/// Render the detail screen body: odds table on top, chart below
pub fn render_detail(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Min(7), Constraint::Length(14)]).split(area);

    render_odds_table(f, chunks[0], app);
    chart::render_history_chart(f, chunks[1], app);
}

fn render_odds_table(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.detail.data() {
        Some(detail) => format!(" {} ", detail.matchup()),
        None => " EVENT ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.detail {
        FetchState::Idle | FetchState::Loading => {
            f.render_widget(
                Paragraph::new("Loading event detail...").style(THEME.inactive_style()),
                inner,
            );
        }
        FetchState::Errored(message) => {
            f.render_widget(
                Paragraph::new(message.as_str()).style(THEME.error_style()),
                inner,
            );
        }
        FetchState::Loaded(detail) => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("  Starts: ", THEME.inactive_style()),
                    Span::styled(
                        format!(
                            "{} ({})",
                            format_commence(detail.commence_time),
                            relative_time(detail.commence_time)
                        ),
                        THEME.text_style(),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} {} {} {} {}",
                        pad("BOOKMAKER", 18),
                        pad("H2H HOME", 9),
                        pad("H2H AWAY", 9),
                        pad("SPREAD HOME", 12),
                        pad("SPREAD AWAY", 12),
                    ),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
            ];

            if detail.current_odds.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  No bookmaker odds in the latest snapshot.",
                    THEME.inactive_style(),
                )));
            } else {
                let best = best_h2h(&detail.current_odds);
                for bm in &detail.current_odds {
                    lines.push(bookmaker_row(bm, &best));
                }
            }

            f.render_widget(Paragraph::new(lines), inner);
        }
    }
}

fn bookmaker_row(bm: &BookmakerOdds, best: &BestH2h) -> Line<'static> {
    // Best-price cells get the highlight; equal maxima all light up.
    let home_style = if bm.h2h.home.is_some() && bm.h2h.home == best.home_best {
        THEME.best_style()
    } else {
        THEME.text_style()
    };
    let away_style = if bm.h2h.away.is_some() && bm.h2h.away == best.away_best {
        THEME.best_style()
    } else {
        THEME.text_style()
    };

    let spread_home = bm.spreads.home.unwrap_or_default();
    let spread_away = bm.spreads.away.unwrap_or_default();

    Line::from(vec![
        Span::raw("  "),
        Span::styled(pad(bm.label(), 18), THEME.text_style()),
        Span::raw(" "),
        Span::styled(pad(&format_price(bm.h2h.home), 9), home_style),
        Span::raw(" "),
        Span::styled(pad(&format_price(bm.h2h.away), 9), away_style),
        Span::raw(" "),
        Span::styled(
            pad(&format_price_point(spread_home.price, spread_home.point), 12),
            THEME.text_style(),
        ),
        Span::raw(" "),
        Span::styled(
            pad(&format_price_point(spread_away.price, spread_away.point), 12),
            THEME.text_style(),
        ),
    ])
}
