//! Domain types shared across the client, the CLI and the dashboard.
//!
//! Records mirror the wire format of the external odds service; the only
//! derived logic living here is the best-price scan and the history
//! series projection.

pub mod event;
pub mod history;
pub mod market;

pub use event::{Event, EventDetail, OddsComparison, Sport, SpreadComparison, TotalsComparison};
pub use history::{project_series, OddsHistory, OddsHistoryPoint, SeriesPoint};
pub use market::{best_h2h, BestH2h, BookmakerOdds, H2hPrices, MarketType, PricePoint, SpreadPrices, TotalsPrices};
