//! Odds history line chart.
//!
//! Plots the two projected series for the selected market. The home/away
//! slots are a chart convention; the legend labels come from the market
//! so totals reads as over/under.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Rect,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::domain::project_series;
use crate::tui::app::App;
use crate::tui::data::FetchState;
use crate::tui::theme::THEME;

/// Render the history chart for the detail screen
pub fn render_history_chart(f: &mut Frame, area: Rect, app: &App) {
    let bookmaker = app.bookmaker_label().unwrap_or("all bookmakers");
    let title = format!(
        " HISTORY - {} - {}h - {} ",
        app.market.as_str().to_uppercase(),
        app.hours,
        bookmaker
    );
    let block = Block::default()
        .title(title)
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    match &app.history {
        FetchState::Idle | FetchState::Loading => {
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(
                Paragraph::new("Loading history...").style(THEME.inactive_style()),
                inner,
            );
        }
        FetchState::Errored(message) => {
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(
                Paragraph::new(message.as_str()).style(THEME.error_style()),
                inner,
            );
        }
        FetchState::Loaded(history) => {
            let series = project_series(Some(history), app.market);

            let home_points: Vec<(f64, f64)> = series
                .iter()
                .filter_map(|p| p.home.map(|v| (epoch(p.t), v)))
                .collect();
            let away_points: Vec<(f64, f64)> = series
                .iter()
                .filter_map(|p| p.away.map(|v| (epoch(p.t), v)))
                .collect();

            if home_points.is_empty() && away_points.is_empty() {
                let inner = block.inner(area);
                f.render_widget(block, area);
                f.render_widget(
                    Paragraph::new("No history data for this selection.")
                        .style(THEME.inactive_style()),
                    inner,
                );
                return;
            }

            let (x_min, x_max) = bounds(
                home_points
                    .iter()
                    .chain(away_points.iter())
                    .map(|(x, _)| *x),
            );
            let (y_min, y_max) = bounds(
                home_points
                    .iter()
                    .chain(away_points.iter())
                    .map(|(_, y)| *y),
            );

            let (home_label, away_label) = app.market.series_labels();
            let datasets = vec![
                Dataset::default()
                    .name(home_label)
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(THEME.home_style())
                    .data(&home_points),
                Dataset::default()
                    .name(away_label)
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(THEME.away_style())
                    .data(&away_points),
            ];

            let x_axis = Axis::default()
                .style(THEME.inactive_style())
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::raw(time_label(x_min)),
                    Span::raw(time_label((x_min + x_max) / 2.0)),
                    Span::raw(time_label(x_max)),
                ]);
            let y_axis = Axis::default()
                .style(THEME.inactive_style())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{y_min:.2}")),
                    Span::raw(format!("{:.2}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{y_max:.2}")),
                ]);

            let chart = Chart::new(datasets)
                .block(block)
                .x_axis(x_axis)
                .y_axis(y_axis);
            f.render_widget(chart, area);
        }
    }
}

fn epoch(t: DateTime<Utc>) -> f64 {
    t.timestamp() as f64
}

fn time_label(epoch_secs: f64) -> String {
    let t = DateTime::<Utc>::from_timestamp(epoch_secs as i64, 0).unwrap_or_default();
    t.with_timezone(&Local).format("%H:%M").to_string()
}

/// Min/max with a small pad so flat series still draw
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}
