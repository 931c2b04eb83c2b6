use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Betting market selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    H2h,
    Spreads,
    Totals,
}

impl MarketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::H2h => "h2h",
            MarketType::Spreads => "spreads",
            MarketType::Totals => "totals",
        }
    }

    /// Cycle order used by the detail screen market control
    pub fn next(&self) -> Self {
        match self {
            MarketType::H2h => MarketType::Spreads,
            MarketType::Spreads => MarketType::Totals,
            MarketType::Totals => MarketType::H2h,
        }
    }

    /// Legend labels for the two chart series, in (home slot, away slot)
    /// order. Totals reuses the slots for over/under; the labels keep the
    /// field mapping explicit.
    pub fn series_labels(&self) -> (&'static str, &'static str) {
        match self {
            MarketType::H2h => ("H2H Home", "H2H Away"),
            MarketType::Spreads => ("Spread Home (price)", "Spread Away (price)"),
            MarketType::Totals => ("Totals Over (price)", "Totals Under (price)"),
        }
    }
}

impl std::fmt::Display for MarketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MarketType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h2h" => Ok(MarketType::H2h),
            "spreads" => Ok(MarketType::Spreads),
            "totals" => Ok(MarketType::Totals),
            other => Err(format!("unknown market type: {other}")),
        }
    }
}

/// Moneyline prices quoted by one bookmaker
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct H2hPrices {
    #[serde(default)]
    pub home: Option<f64>,
    #[serde(default)]
    pub away: Option<f64>,
}

/// Price and point for one side of a handicap or totals line
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub point: Option<f64>,
}

/// Spread lines quoted by one bookmaker
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpreadPrices {
    #[serde(default)]
    pub home: Option<PricePoint>,
    #[serde(default)]
    pub away: Option<PricePoint>,
}

/// Totals lines quoted by one bookmaker
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TotalsPrices {
    #[serde(default)]
    pub over: Option<PricePoint>,
    #[serde(default)]
    pub under: Option<PricePoint>,
}

/// One bookmaker's snapshot for one event. Every price and point field is
/// optionally absent; missing and null read the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmakerOdds {
    pub bookmaker_key: String,
    #[serde(default)]
    pub bookmaker_title: Option<String>,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub h2h: H2hPrices,
    #[serde(default)]
    pub spreads: SpreadPrices,
    #[serde(default)]
    pub totals: TotalsPrices,
}

impl BookmakerOdds {
    /// Display label: title when the service provides one, else the key
    pub fn label(&self) -> &str {
        self.bookmaker_title
            .as_deref()
            .unwrap_or(&self.bookmaker_key)
    }
}

/// Best moneyline price per side across bookmakers, each side independent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestH2h {
    pub home_best: Option<f64>,
    pub away_best: Option<f64>,
    pub home_bookie: Option<String>,
    pub away_bookie: Option<String>,
}

/// Scan bookmaker quotes for the highest home and away moneyline price.
///
/// Absent quotes are skipped, not errors. Ties keep the bookmaker that
/// appears earlier in the input (strict greater-than replacement).
pub fn best_h2h(bookmakers: &[BookmakerOdds]) -> BestH2h {
    let mut best = BestH2h::default();

    for bm in bookmakers {
        if let Some(home) = bm.h2h.home {
            if best.home_best.map_or(true, |cur| home > cur) {
                best.home_best = Some(home);
                best.home_bookie = Some(bm.label().to_string());
            }
        }
        if let Some(away) = bm.h2h.away {
            if best.away_best.map_or(true, |cur| away > cur) {
                best.away_best = Some(away);
                best.away_bookie = Some(bm.label().to_string());
            }
        }
    }

    best
}
