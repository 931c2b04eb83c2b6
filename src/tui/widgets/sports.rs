//! Sport picker panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::data::FetchState;
use crate::tui::theme::THEME;
use crate::tui::widgets::pad;

/// Render the sport list
pub fn render_sports(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" CHOOSE A SPORT ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.sports {
        FetchState::Idle | FetchState::Loading => {
            f.render_widget(
                Paragraph::new("Loading sports...").style(THEME.inactive_style()),
                inner,
            );
        }
        FetchState::Errored(message) => {
            f.render_widget(
                Paragraph::new(message.as_str()).style(THEME.error_style()),
                inner,
            );
        }
        FetchState::Loaded(sports) if sports.is_empty() => {
            f.render_widget(
                Paragraph::new("No sports available.").style(THEME.inactive_style()),
                inner,
            );
        }
        FetchState::Loaded(sports) => {
            let header = Line::from(Span::styled(
                format!("  {} {} {}", pad("SPORT", 22), pad("KEY", 28), "EVENTS"),
                Style::default().add_modifier(Modifier::BOLD),
            ));

            let mut lines = vec![header];
            for (i, sport) in sports.iter().enumerate() {
                let selected = i == app.sports_selected;
                let marker = if selected { "> " } else { "  " };
                let style = if selected {
                    THEME.selection_style()
                } else {
                    THEME.text_style()
                };
                lines.push(Line::from(vec![
                    Span::styled(marker.to_string(), style),
                    Span::styled(pad(&sport.sport_name, 22), style),
                    Span::raw(" "),
                    Span::styled(pad(&sport.sport_key, 28), THEME.inactive_style()),
                    Span::styled(format!(" {:>5}", sport.event_count), style),
                ]));
            }

            f.render_widget(Paragraph::new(lines), inner);
        }
    }
}
