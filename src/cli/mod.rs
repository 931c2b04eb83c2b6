//! Command-line interface.
//!
//! `oddsboard` with no subcommand opens the dashboard; the other
//! subcommands hit one endpoint each and print the result as a table or
//! as JSON.

pub mod output;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::adapters::{CancelSignal, OddsServiceClient};
use crate::domain::{best_h2h, project_series, MarketType};
use crate::tui::data::{format_commence, format_price, format_price_point, relative_time};

pub use output::OutputMode;

/// Terminal dashboard for comparing sports betting odds
#[derive(Parser, Debug)]
#[command(name = "oddsboard", version, about)]
pub struct Cli {
    /// Override the odds service base URL
    #[arg(long, env = "ODDSBOARD_API_URL", global = true)]
    pub base_url: Option<String>,

    /// Print JSON instead of tables (one-shot commands)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    Dash,
    /// List sports known to the service
    Sports,
    /// List events and best h2h prices for a sport
    Events { sport_key: String },
    /// Show the latest odds snapshot for one event
    Detail { event_id: String },
    /// Show projected odds history points for one event
    History {
        event_id: String,
        /// Market to project (h2h, spreads, totals)
        #[arg(long, default_value = "h2h")]
        market: MarketType,
        /// Lookback window in hours
        #[arg(long, default_value_t = 72)]
        hours: u32,
        /// Restrict to a single bookmaker key
        #[arg(long)]
        bookmaker: Option<String>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct SportRow {
    key: String,
    name: String,
    events: u32,
}

#[derive(Debug, Serialize, Tabled)]
struct EventRow {
    event_id: String,
    matchup: String,
    starts: String,
    best_home: String,
    home_bookie: String,
    best_away: String,
    away_bookie: String,
    live: String,
}

#[derive(Debug, Serialize, Tabled)]
struct SnapshotRow {
    bookmaker: String,
    h2h_home: String,
    h2h_away: String,
    spread_home: String,
    spread_away: String,
    totals_over: String,
    totals_under: String,
}

#[derive(Debug, Serialize, Tabled)]
struct HistoryRow {
    time: String,
    home_slot: String,
    away_slot: String,
}

pub async fn run_sports(client: &OddsServiceClient, mode: OutputMode) -> anyhow::Result<()> {
    let sports = client.fetch_sports().await?;
    let rows: Vec<SportRow> = sports
        .into_iter()
        .map(|s| SportRow {
            key: s.sport_key,
            name: s.sport_name,
            events: s.event_count,
        })
        .collect();
    output::print_items(&rows, mode)
}

pub async fn run_events(
    client: &OddsServiceClient,
    sport_key: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let events = client.fetch_events(sport_key, CancelSignal::never()).await?;
    let rows: Vec<EventRow> = events
        .iter()
        .map(|event| {
            let best = best_h2h(&event.bookmakers);
            EventRow {
                event_id: event.event_id.clone(),
                matchup: event.matchup(),
                starts: format!(
                    "{} ({})",
                    format_commence(event.commence_time),
                    relative_time(event.commence_time)
                ),
                best_home: format_price(best.home_best),
                home_bookie: best.home_bookie.unwrap_or_default(),
                best_away: format_price(best.away_best),
                away_bookie: best.away_bookie.unwrap_or_default(),
                live: if event.is_live { "LIVE" } else { "" }.to_string(),
            }
        })
        .collect();
    output::print_items(&rows, mode)
}

pub async fn run_detail(
    client: &OddsServiceClient,
    event_id: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let detail = client.fetch_event_detail(event_id).await?;
    println!(
        "{} | starts {}",
        detail.matchup(),
        format_commence(detail.commence_time)
    );

    let rows: Vec<SnapshotRow> = detail
        .current_odds
        .iter()
        .map(|bm| {
            let spread_home = bm.spreads.home.unwrap_or_default();
            let spread_away = bm.spreads.away.unwrap_or_default();
            let over = bm.totals.over.unwrap_or_default();
            let under = bm.totals.under.unwrap_or_default();
            SnapshotRow {
                bookmaker: bm.label().to_string(),
                h2h_home: format_price(bm.h2h.home),
                h2h_away: format_price(bm.h2h.away),
                spread_home: format_price_point(spread_home.price, spread_home.point),
                spread_away: format_price_point(spread_away.price, spread_away.point),
                totals_over: format_price_point(over.price, over.point),
                totals_under: format_price_point(under.price, under.point),
            }
        })
        .collect();
    output::print_items(&rows, mode)
}

pub async fn run_history(
    client: &OddsServiceClient,
    event_id: &str,
    market: MarketType,
    hours: u32,
    bookmaker: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let history = client
        .fetch_event_history(event_id, market, hours, bookmaker)
        .await?;

    let (home_label, away_label) = market.series_labels();
    println!("{home_label} / {away_label}");

    let rows: Vec<HistoryRow> = project_series(Some(&history), market)
        .iter()
        .map(|point| HistoryRow {
            time: point.t.format("%m-%d %H:%M").to_string(),
            home_slot: format_price(point.home),
            away_slot: format_price(point.away),
        })
        .collect();
    output::print_items(&rows, mode)
}
