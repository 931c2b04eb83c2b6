use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::market::{BookmakerOdds, H2hPrices};

/// A sport with its current event count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    pub sport_key: String,
    pub sport_name: String,
    #[serde(default)]
    pub event_count: u32,
}

/// An upcoming or live event with per-bookmaker odds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub sport_key: String,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    pub commence_time: DateTime<Utc>,
    #[serde(default)]
    pub bookmakers: Vec<BookmakerOdds>,
    #[serde(default)]
    pub is_live: bool,
}

impl Event {
    /// "Home vs Away", with placeholders for unnamed teams
    pub fn matchup(&self) -> String {
        format!(
            "{} vs {}",
            self.home_team.as_deref().unwrap_or("Home"),
            self.away_team.as_deref().unwrap_or("Away")
        )
    }
}

/// Cross-bookmaker comparison for the spreads market
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpreadComparison {
    #[serde(default)]
    pub home_price: Option<f64>,
    #[serde(default)]
    pub home_point: Option<f64>,
    #[serde(default)]
    pub away_price: Option<f64>,
    #[serde(default)]
    pub away_point: Option<f64>,
}

/// Cross-bookmaker comparison for the totals market
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TotalsComparison {
    #[serde(default)]
    pub over_price: Option<f64>,
    #[serde(default)]
    pub over_point: Option<f64>,
    #[serde(default)]
    pub under_price: Option<f64>,
    #[serde(default)]
    pub under_point: Option<f64>,
}

/// Denormalized comparison blocks keyed by market name on the wire
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OddsComparison {
    #[serde(default)]
    pub h2h: Option<H2hPrices>,
    #[serde(default)]
    pub spreads: Option<SpreadComparison>,
    #[serde(default)]
    pub totals: Option<TotalsComparison>,
}

/// Event plus its latest odds snapshot and comparison map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    pub event_id: String,
    pub sport_key: String,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    pub commence_time: DateTime<Utc>,
    #[serde(default)]
    pub current_odds: Vec<BookmakerOdds>,
    #[serde(default)]
    pub odds_comparison: OddsComparison,
}

impl EventDetail {
    pub fn matchup(&self) -> String {
        format!(
            "{} vs {}",
            self.home_team.as_deref().unwrap_or("Home"),
            self.away_team.as_deref().unwrap_or("Away")
        )
    }
}
