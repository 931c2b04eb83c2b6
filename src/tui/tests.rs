use chrono::Utc;

use crate::domain::{Event, EventDetail, MarketType, OddsComparison, OddsHistory, Sport};
use crate::error::OddsboardError;
use crate::tui::app::{App, Screen, HOURS_CHOICES};
use crate::tui::data::FetchState;

fn app() -> App {
    App::new(MarketType::H2h, 72)
}

fn sport(key: &str) -> Sport {
    Sport {
        sport_key: key.to_string(),
        sport_name: key.to_uppercase(),
        event_count: 3,
    }
}

fn event(id: &str, sport_key: &str) -> Event {
    Event {
        event_id: id.to_string(),
        sport_key: sport_key.to_string(),
        home_team: Some("Home".to_string()),
        away_team: Some("Away".to_string()),
        commence_time: Utc::now(),
        bookmakers: Vec::new(),
        is_live: false,
    }
}

fn detail(id: &str, bookmakers: &[&str]) -> EventDetail {
    EventDetail {
        event_id: id.to_string(),
        sport_key: "basketball_nba".to_string(),
        home_team: None,
        away_team: None,
        commence_time: Utc::now(),
        current_odds: bookmakers
            .iter()
            .map(|key| crate::domain::BookmakerOdds {
                bookmaker_key: key.to_string(),
                bookmaker_title: None,
                last_update: None,
                h2h: Default::default(),
                spreads: Default::default(),
                totals: Default::default(),
            })
            .collect(),
        odds_comparison: OddsComparison::default(),
    }
}

fn history(event_id: &str) -> OddsHistory {
    OddsHistory {
        event_id: event_id.to_string(),
        home_team: None,
        away_team: None,
        market_type: MarketType::H2h,
        bookmaker: None,
        history: Vec::new(),
    }
}

#[test]
fn starts_on_the_sports_screen() {
    let app = app();
    assert!(app.is_running());
    assert_eq!(app.screen, Screen::Sports);
    assert_eq!(app.sports, FetchState::Idle);
    assert!(!app.show_help);
}

#[test]
fn sports_load_and_selection() {
    let mut app = app();
    app.begin_sports_load();
    assert!(app.sports.is_loading());

    app.apply_sports(Ok(vec![sport("nfl"), sport("nba")]));
    assert_eq!(app.sports.data().unwrap().len(), 2);

    app.select_down();
    assert_eq!(app.selected_sport().unwrap().sport_key, "nba");
    app.select_down();
    assert_eq!(app.sports_selected, 1); // clamped at the end
    app.select_up();
    assert_eq!(app.sports_selected, 0);
}

#[test]
fn stale_events_response_cannot_overwrite_newer_state() {
    let mut app = app();
    app.enter_events("americanfootball_nfl".to_string());
    let seq_nfl = app.begin_events_load();

    // User switches sports while the first request is in flight.
    app.enter_events("basketball_nba".to_string());
    let seq_nba = app.begin_events_load();
    assert!(seq_nba > seq_nfl);

    // The superseded request settles late with data; it must be dropped.
    app.apply_events(seq_nfl, Ok(vec![event("nfl-1", "americanfootball_nfl")]));
    assert!(app.events.is_loading());

    // Its cancellation result must not raise the error banner either.
    app.apply_events(seq_nfl, Err(OddsboardError::Cancelled));
    assert!(app.events.is_loading());
    assert!(app.events.error().is_none());

    app.apply_events(seq_nba, Ok(vec![event("nba-1", "basketball_nba")]));
    let events = app.events.data().unwrap();
    assert_eq!(events[0].event_id, "nba-1");
}

#[test]
fn cancellation_never_reaches_the_error_state() {
    let mut app = app();
    app.enter_events("soccer_epl".to_string());
    let seq = app.begin_events_load();
    app.apply_events(seq, Err(OddsboardError::Cancelled));
    assert!(app.events.error().is_none());
}

#[test]
fn genuine_failures_surface_a_message() {
    let mut app = app();
    app.enter_events("soccer_epl".to_string());
    let seq = app.begin_events_load();
    app.apply_events(seq, Err(OddsboardError::Internal("boom".to_string())));
    assert!(app.events.error().unwrap().contains("boom"));
}

#[test]
fn refresh_supersedes_the_previous_request() {
    let mut app = app();
    app.enter_events("soccer_epl".to_string());
    let first = app.begin_events_load();
    let second = app.begin_events_load();

    app.apply_events(first, Ok(vec![event("old", "soccer_epl")]));
    assert!(app.events.is_loading());
    app.apply_events(second, Ok(vec![event("new", "soccer_epl")]));
    assert_eq!(app.events.data().unwrap()[0].event_id, "new");
}

#[test]
fn change_sport_wraps_and_resets_selection() {
    let mut app = app();
    app.apply_sports(Ok(vec![sport("nfl"), sport("nba"), sport("mlb")]));
    app.enter_events("nfl".to_string());
    app.events_selected = 2;

    assert_eq!(app.change_sport(1).as_deref(), Some("nba"));
    assert_eq!(app.events_selected, 0);
    assert_eq!(app.change_sport(-1).as_deref(), Some("nfl"));
    assert_eq!(app.change_sport(-1).as_deref(), Some("mlb"));
    assert_eq!(app.sport_key.as_deref(), Some("mlb"));
}

#[test]
fn change_sport_needs_a_loaded_sport_list() {
    let mut app = app();
    app.enter_events("nfl".to_string());
    assert!(app.change_sport(1).is_none());
}

#[test]
fn detail_load_picks_a_default_bookmaker_once() {
    let mut app = app();
    app.enter_detail("evt-1".to_string());
    app.begin_detail_load();

    let refetch = app.apply_detail("evt-1", Ok(detail("evt-1", &["dk", "fd"])));
    assert!(refetch);
    assert_eq!(app.bookmaker_key(), Some("dk"));

    // A refresh of the same event keeps the user's filter in place.
    let refetch = app.apply_detail("evt-1", Ok(detail("evt-1", &["dk", "fd"])));
    assert!(!refetch);
}

#[test]
fn detail_for_another_event_is_ignored() {
    let mut app = app();
    app.enter_detail("evt-2".to_string());
    app.begin_detail_load();

    let refetch = app.apply_detail("evt-1", Ok(detail("evt-1", &["dk"])));
    assert!(!refetch);
    assert!(app.detail.data().is_none());
}

#[test]
fn stale_history_response_is_dropped() {
    let mut app = app();
    app.enter_detail("evt-1".to_string());
    let first = app.begin_history_load();
    let second = app.begin_history_load();

    app.apply_history(first, Ok(history("evt-1")));
    assert!(app.history.is_loading());
    app.apply_history(second, Ok(history("evt-1")));
    assert!(app.history.data().is_some());
}

#[test]
fn chart_controls_cycle() {
    let mut app = app();
    assert_eq!(app.market, MarketType::H2h);
    app.cycle_market();
    assert_eq!(app.market, MarketType::Spreads);
    app.cycle_market();
    assert_eq!(app.market, MarketType::Totals);
    app.cycle_market();
    assert_eq!(app.market, MarketType::H2h);

    assert_eq!(app.hours, 72);
    app.cycle_window();
    assert_eq!(app.hours, HOURS_CHOICES[0]);
    app.cycle_window();
    assert_eq!(app.hours, HOURS_CHOICES[1]);
}

#[test]
fn bookmaker_cycle_walks_the_snapshot_then_clears() {
    let mut app = app();
    app.enter_detail("evt-1".to_string());
    app.apply_detail("evt-1", Ok(detail("evt-1", &["dk", "fd"])));
    assert_eq!(app.bookmaker_key(), Some("dk"));

    app.cycle_bookmaker();
    assert_eq!(app.bookmaker_key(), Some("fd"));
    app.cycle_bookmaker();
    assert_eq!(app.bookmaker_key(), None); // all bookmakers
    app.cycle_bookmaker();
    assert_eq!(app.bookmaker_key(), Some("dk"));
}

#[test]
fn back_walks_detail_events_sports() {
    let mut app = app();
    app.enter_events("nfl".to_string());
    app.enter_detail("evt-1".to_string());

    assert!(!app.go_back()); // detail -> events, nothing to cancel
    assert_eq!(app.screen, Screen::Events);
    assert!(app.event_id.is_none());

    assert!(app.go_back()); // events -> sports, cancel in-flight fetch
    assert_eq!(app.screen, Screen::Sports);
    assert!(app.sport_key.is_none());

    assert!(!app.go_back()); // already at the root
    assert_eq!(app.screen, Screen::Sports);
}

#[test]
fn quit_stops_the_loop() {
    let mut app = app();
    app.quit();
    assert!(!app.is_running());
}
