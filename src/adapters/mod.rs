//! Adapters for the external odds service.

pub mod cancel;
pub mod odds_rest;

pub use cancel::{cancel_pair, CancelHandle, CancelSignal};
pub use odds_rest::OddsServiceClient;
