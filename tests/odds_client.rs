//! API client integration tests against a local stub odds service.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use oddsboard::adapters::{cancel_pair, CancelSignal, OddsServiceClient};
use oddsboard::domain::MarketType;
use oddsboard::error::OddsboardError;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn fetches_and_decodes_the_sports_list() {
    let router = Router::new().route(
        "/api/sports",
        get(|| async {
            Json(json!([
                {"sport_key": "basketball_nba", "sport_name": "NBA", "event_count": 12},
                {"sport_key": "soccer_epl", "sport_name": "Soccer (EPL)", "event_count": 8}
            ]))
        }),
    );
    let base = serve(router).await;

    let client = OddsServiceClient::new(&base).unwrap();
    let sports = client.fetch_sports().await.unwrap();
    assert_eq!(sports.len(), 2);
    assert_eq!(sports[0].sport_key, "basketball_nba");
    assert_eq!(sports[1].event_count, 8);
}

#[tokio::test]
async fn fetches_events_with_bookmaker_odds() {
    let router = Router::new().route(
        "/api/sports/:sport_key/events",
        get(|Path(sport_key): Path<String>| async move {
            Json(json!([{
                "event_id": "evt-1",
                "sport_key": sport_key,
                "home_team": "Chiefs",
                "away_team": "Bills",
                "commence_time": "2026-02-01T23:30:00Z",
                "is_live": false,
                "bookmakers": [{
                    "bookmaker_key": "draftkings",
                    "bookmaker_title": "DraftKings",
                    "h2h": {"home": 1.87, "away": null},
                    "spreads": {"home": {"price": 1.91, "point": -2.5}},
                    "totals": {}
                }]
            }]))
        }),
    );
    let base = serve(router).await;

    let client = OddsServiceClient::new(&base).unwrap();
    let events = client
        .fetch_events("americanfootball_nfl", CancelSignal::never())
        .await
        .unwrap();

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.sport_key, "americanfootball_nfl");
    let bm = &event.bookmakers[0];
    assert_eq!(bm.label(), "DraftKings");
    assert_eq!(bm.h2h.home, Some(1.87));
    assert_eq!(bm.h2h.away, None);
    assert_eq!(bm.spreads.home.unwrap().point, Some(-2.5));
    assert!(bm.totals.over.is_none());
}

#[tokio::test]
async fn non_success_status_surfaces_the_code() {
    let router = Router::new().route(
        "/api/sports",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let base = serve(router).await;

    let client = OddsServiceClient::new(&base).unwrap();
    let err = client.fetch_sports().await.unwrap_err();
    match err {
        OddsboardError::Status { status } => assert_eq!(status.as_u16(), 502),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route("/api/sports", get(|| async { "{not json" }));
    let base = serve(router).await;

    let client = OddsServiceClient::new(&base).unwrap();
    let err = client.fetch_sports().await.unwrap_err();
    assert!(matches!(err, OddsboardError::Decode { .. }));
    assert!(!err.is_cancelled());
}

#[tokio::test]
async fn events_fetch_resolves_to_cancelled_when_the_handle_fires() {
    let router = Router::new().route(
        "/api/sports/:sport_key/events",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([]))
        }),
    );
    let base = serve(router).await;

    let client = OddsServiceClient::new(&base).unwrap();
    let (handle, signal) = cancel_pair();

    let started = Instant::now();
    let fetch = tokio::spawn(async move {
        client.fetch_events("basketball_nba", signal).await
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.cancel();

    let result = fetch.await.unwrap();
    assert!(matches!(result, Err(OddsboardError::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn event_ids_survive_the_round_trip_escaped() {
    let router = Router::new().route(
        "/api/events/:event_id",
        get(|Path(event_id): Path<String>| async move {
            Json(json!({
                "event_id": event_id,
                "sport_key": "soccer_epl",
                "commence_time": "2026-02-02T15:00:00Z",
                "current_odds": [],
                "odds_comparison": {}
            }))
        }),
    );
    let base = serve(router).await;

    let client = OddsServiceClient::new(&base).unwrap();
    let detail = client.fetch_event_detail("evt 001+x").await.unwrap();
    assert_eq!(detail.event_id, "evt 001+x");
}

#[tokio::test]
async fn history_query_parameters_are_serialized() {
    let router = Router::new().route(
        "/api/events/:event_id/history",
        get(
            |Path(event_id): Path<String>, Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "event_id": event_id,
                    "market_type": params.get("market_type"),
                    "bookmaker": params.get("bookmaker"),
                    "history": [{
                        "timestamp": "2026-02-01T10:00:00Z",
                        "bookmaker": "draftkings",
                        "market_type": params.get("market_type"),
                        "values": {"over_price": 1.9, "under_price": null}
                    }],
                    "hours_echo": params.get("hours")
                }))
            },
        ),
    );
    let base = serve(router).await;
    let client = OddsServiceClient::new(&base).unwrap();

    let history = client
        .fetch_event_history("evt-1", MarketType::Totals, 48, Some("draftkings"))
        .await
        .unwrap();
    assert_eq!(history.market_type, MarketType::Totals);
    assert_eq!(history.bookmaker.as_deref(), Some("draftkings"));
    assert_eq!(history.history.len(), 1);
    assert_eq!(history.history[0].value("over_price"), Some(1.9));
    assert_eq!(history.history[0].value("under_price"), None);

    // Without a bookmaker filter the parameter is left off entirely.
    let history = client
        .fetch_event_history("evt-1", MarketType::H2h, 72, None)
        .await
        .unwrap();
    assert_eq!(history.bookmaker, None);
}
