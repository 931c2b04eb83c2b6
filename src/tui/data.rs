//! Fetch-state and display formatting helpers for the dashboard.

use chrono::{DateTime, Local, Utc};

/// Per-resource fetch lifecycle. Every screen renders from one of these;
/// transitions are driven by the runner's begin/apply calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Errored(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Errored(message) => Some(message),
            _ => None,
        }
    }
}

/// Local-time stamp for table rows
pub fn format_commence(t: DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%m-%d %H:%M").to_string()
}

/// Coarse offset relative to now ("in 2h", "34m ago", "now")
pub fn relative_time(t: DateTime<Utc>) -> String {
    relative_to(t, Utc::now())
}

fn relative_to(t: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_min = (t - now).num_minutes();
    if diff_min > 60 {
        format!("in {}h", (diff_min + 30) / 60)
    } else if diff_min > 1 {
        format!("in {}m", diff_min)
    } else if (-1..=1).contains(&diff_min) {
        "now".to_string()
    } else if diff_min >= -60 {
        format!("{}m ago", -diff_min)
    } else {
        format!("{}h ago", (-diff_min + 30) / 60)
    }
}

/// "-" for absent quotes, two decimals otherwise
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

/// Point values render with one decimal
pub fn format_point(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

/// "price@point" cell for spread and totals columns
pub fn format_price_point(price: Option<f64>, point: Option<f64>) -> String {
    format!("{}@{}", format_price(price), format_point(point))
}
