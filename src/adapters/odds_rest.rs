//! REST client for the external odds service.
//!
//! Thin request/response wrapper: one request per call, no retry, no
//! backoff, no caching. Bodies are decoded through the typed domain
//! records; a body that does not match the documented shape surfaces as a
//! `Decode` error instead of silently rendering as missing data.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::{Event, EventDetail, MarketType, OddsHistory, Sport};
use crate::error::{OddsboardError, Result};

use super::cancel::CancelSignal;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct OddsServiceClient {
    http: Client,
    base_url: Url,
}

impl OddsServiceClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let http = Client::builder()
            .user_agent(concat!("oddsboard/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &'static str,
    ) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        debug!(%status, context, "odds service response");
        if !status.is_success() {
            return Err(OddsboardError::Status { status });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| OddsboardError::Decode { context, source })
    }

    /// List sports currently known to the service.
    pub async fn fetch_sports(&self) -> Result<Vec<Sport>> {
        let url = self.endpoint("/api/sports");
        self.send_json(self.http.get(url), "sports list").await
    }

    /// Events for one sport. The signal aborts the request in place; a
    /// cancelled call resolves to `OddsboardError::Cancelled`, which the
    /// caller is expected to swallow rather than report.
    pub async fn fetch_events(&self, sport_key: &str, mut cancel: CancelSignal) -> Result<Vec<Event>> {
        let url = self.endpoint(&events_path(sport_key));
        tokio::select! {
            _ = cancel.cancelled() => Err(OddsboardError::Cancelled),
            result = self.send_json(self.http.get(url), "event list") => result,
        }
    }

    /// Latest snapshot and comparison map for one event.
    pub async fn fetch_event_detail(&self, event_id: &str) -> Result<EventDetail> {
        let url = self.endpoint(&detail_path(event_id));
        self.send_json(self.http.get(url), "event detail").await
    }

    /// Odds history for one event, market and lookback window, optionally
    /// filtered to a single bookmaker.
    pub async fn fetch_event_history(
        &self,
        event_id: &str,
        market: MarketType,
        hours: u32,
        bookmaker: Option<&str>,
    ) -> Result<OddsHistory> {
        let url = self.endpoint(&history_path(event_id));
        let hours = hours.to_string();
        let mut request = self
            .http
            .get(url)
            .query(&[("market_type", market.as_str()), ("hours", hours.as_str())]);
        if let Some(bookmaker) = bookmaker {
            request = request.query(&[("bookmaker", bookmaker)]);
        }

        self.send_json(request, "odds history").await
    }
}

fn events_path(sport_key: &str) -> String {
    format!("/api/sports/{}/events", urlencoding::encode(sport_key))
}

fn detail_path(event_id: &str) -> String {
    format!("/api/events/{}", urlencoding::encode(event_id))
}

fn history_path(event_id: &str) -> String {
    format!("/api/events/{}/history", urlencoding::encode(event_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = OddsServiceClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.endpoint("/api/sports"),
            "http://localhost:8000/api/sports"
        );

        let client = OddsServiceClient::new("http://localhost:8000/").unwrap();
        assert_eq!(
            client.endpoint("/api/sports"),
            "http://localhost:8000/api/sports"
        );
    }

    #[test]
    fn event_ids_are_percent_escaped() {
        assert_eq!(detail_path("evt 1/x"), "/api/events/evt%201%2Fx");
        assert_eq!(history_path("evt+2"), "/api/events/evt%2B2/history");
    }

    #[test]
    fn events_path_uses_the_sport_key() {
        assert_eq!(
            events_path("americanfootball_nfl"),
            "/api/sports/americanfootball_nfl/events"
        );
    }

    #[test]
    fn rejects_an_invalid_base_url() {
        assert!(OddsServiceClient::new("not a url").is_err());
    }
}
