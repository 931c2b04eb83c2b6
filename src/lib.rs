pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod tui;

pub use adapters::{cancel_pair, CancelHandle, CancelSignal, OddsServiceClient};
pub use config::AppConfig;
pub use domain::{best_h2h, project_series, BestH2h, MarketType, SeriesPoint};
pub use error::{OddsboardError, Result};
