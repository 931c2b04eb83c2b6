use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::market::MarketType;

/// One historical snapshot for one bookmaker and market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsHistoryPoint {
    pub timestamp: DateTime<Utc>,
    pub bookmaker: String,
    pub market_type: MarketType,
    #[serde(default)]
    pub values: HashMap<String, Option<f64>>,
}

impl OddsHistoryPoint {
    /// Named field lookup; a missing key and an explicit null read the same
    pub fn value(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied().flatten()
    }
}

/// Time-ordered history for one event/market/bookmaker selection.
/// Points arrive chronological from the service and are not re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsHistory {
    pub event_id: String,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    pub market_type: MarketType,
    #[serde(default)]
    pub bookmaker: Option<String>,
    #[serde(default)]
    pub history: Vec<OddsHistoryPoint>,
}

/// One charted point. The two slots carry market-specific fields; see
/// `MarketType::series_labels` for what each slot means per market.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub t: DateTime<Utc>,
    pub home: Option<f64>,
    pub away: Option<f64>,
}

/// Project history points into the two chart series for a market.
///
/// Field selection only, no computation: h2h charts home/away, spreads
/// charts home_price/away_price (points are not charted), totals charts
/// over_price/under_price in the home/away slots. Input order and count
/// are preserved.
pub fn project_series(history: Option<&OddsHistory>, market: MarketType) -> Vec<SeriesPoint> {
    let Some(history) = history else {
        return Vec::new();
    };

    history
        .history
        .iter()
        .map(|point| {
            let (home, away) = match market {
                MarketType::H2h => (point.value("home"), point.value("away")),
                MarketType::Spreads => (point.value("home_price"), point.value("away_price")),
                MarketType::Totals => (point.value("over_price"), point.value("under_price")),
            };
            SeriesPoint {
                t: point.timestamp,
                home,
                away,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(secs: i64, fields: &[(&str, Option<f64>)]) -> OddsHistoryPoint {
        OddsHistoryPoint {
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            bookmaker: "dk".to_string(),
            market_type: MarketType::H2h,
            values: fields
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    fn history(points: Vec<OddsHistoryPoint>) -> OddsHistory {
        OddsHistory {
            event_id: "evt-1".to_string(),
            home_team: None,
            away_team: None,
            market_type: MarketType::H2h,
            bookmaker: None,
            history: points,
        }
    }

    #[test]
    fn null_history_projects_to_empty() {
        assert!(project_series(None, MarketType::H2h).is_empty());
    }

    #[test]
    fn h2h_projects_home_and_away() {
        let h = history(vec![point(100, &[("home", Some(1.8)), ("away", Some(2.1))])]);
        let series = project_series(Some(&h), MarketType::H2h);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].home, Some(1.8));
        assert_eq!(series[0].away, Some(2.1));
    }

    #[test]
    fn totals_maps_over_under_into_the_slots() {
        let h = history(vec![
            point(100, &[("over_price", Some(1.9)), ("under_price", Some(1.95))]),
            point(200, &[("over_price", Some(1.92)), ("under_price", None)]),
        ]);
        let series = project_series(Some(&h), MarketType::Totals);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].home, Some(1.9));
        assert_eq!(series[0].away, Some(1.95));
        assert_eq!(series[1].home, Some(1.92));
        assert_eq!(series[1].away, None);
    }

    #[test]
    fn spreads_charts_prices_not_points() {
        let h = history(vec![point(
            100,
            &[
                ("home_price", Some(1.87)),
                ("home_point", Some(-3.5)),
                ("away_price", Some(1.98)),
                ("away_point", Some(3.5)),
            ],
        )]);
        let series = project_series(Some(&h), MarketType::Spreads);
        assert_eq!(series[0].home, Some(1.87));
        assert_eq!(series[0].away, Some(1.98));
    }

    #[test]
    fn input_order_is_preserved() {
        let h = history(vec![
            point(300, &[("home", Some(1.0))]),
            point(100, &[("home", Some(2.0))]),
            point(200, &[("home", Some(3.0))]),
        ]);
        let series = project_series(Some(&h), MarketType::H2h);
        let homes: Vec<_> = series.iter().map(|p| p.home).collect();
        assert_eq!(homes, vec![Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn missing_fields_read_as_absent() {
        let h = history(vec![point(100, &[("away", Some(2.0))])]);
        let series = project_series(Some(&h), MarketType::H2h);
        assert_eq!(series[0].home, None);
        assert_eq!(series[0].away, Some(2.0));
    }
}
