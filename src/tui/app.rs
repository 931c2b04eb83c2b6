//! Dashboard application state.
//!
//! One struct owns the three screens' fetch state plus the chart
//! controls. Fetch lifecycles are driven in begin/apply pairs: `begin_*`
//! marks the resource loading and hands out the request sequence,
//! `apply_*` folds a completed result back in. Results carrying a stale
//! sequence (superseded by a newer request) or a cancellation are dropped
//! without touching state.

use chrono::{DateTime, Utc};

use crate::domain::{Event, EventDetail, MarketType, OddsHistory, Sport};
use crate::error::OddsboardError;
use crate::tui::data::FetchState;

/// Lookback windows offered by the detail screen, in hours
pub const HOURS_CHOICES: [u32; 3] = [24, 48, 72];

/// Which screen the dashboard is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Sports,
    Events,
    Detail,
}

pub struct App {
    pub screen: Screen,
    running: bool,
    pub show_help: bool,

    pub sports: FetchState<Vec<Sport>>,
    pub sports_selected: usize,

    pub sport_key: Option<String>,
    pub events: FetchState<Vec<Event>>,
    pub events_selected: usize,
    events_seq: u64,

    pub event_id: Option<String>,
    pub detail: FetchState<EventDetail>,
    pub history: FetchState<OddsHistory>,
    history_seq: u64,

    /// Market charted on the detail screen
    pub market: MarketType,
    /// Lookback window in hours
    pub hours: u32,
    /// None charts all bookmakers; Some(i) indexes current_odds
    pub bookmaker_idx: Option<usize>,

    pub last_update: Option<DateTime<Utc>>,
}

impl App {
    pub fn new(market: MarketType, hours: u32) -> Self {
        Self {
            screen: Screen::Sports,
            running: true,
            show_help: false,
            sports: FetchState::Idle,
            sports_selected: 0,
            sport_key: None,
            events: FetchState::Idle,
            events_selected: 0,
            events_seq: 0,
            event_id: None,
            detail: FetchState::Idle,
            history: FetchState::Idle,
            history_seq: 0,
            market,
            hours,
            bookmaker_idx: None,
            last_update: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // === Sports screen ===

    pub fn begin_sports_load(&mut self) {
        self.sports = FetchState::Loading;
    }

    pub fn apply_sports(&mut self, result: Result<Vec<Sport>, OddsboardError>) {
        match result {
            Ok(sports) => {
                self.sports_selected = self.sports_selected.min(sports.len().saturating_sub(1));
                self.sports = FetchState::Loaded(sports);
                self.last_update = Some(Utc::now());
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => self.sports = FetchState::Errored(err.to_string()),
        }
    }

    pub fn selected_sport(&self) -> Option<&Sport> {
        self.sports.data()?.get(self.sports_selected)
    }

    // === Events screen ===

    /// Navigate into the event list for a sport. The caller starts the
    /// actual fetch.
    pub fn enter_events(&mut self, sport_key: String) {
        self.screen = Screen::Events;
        self.sport_key = Some(sport_key);
        self.events = FetchState::Idle;
        self.events_selected = 0;
    }

    /// Mark the event list loading and return the new request sequence.
    /// Any response carrying an older sequence is stale.
    pub fn begin_events_load(&mut self) -> u64 {
        self.events_seq += 1;
        self.events = FetchState::Loading;
        self.events_seq
    }

    pub fn apply_events(&mut self, seq: u64, result: Result<Vec<Event>, OddsboardError>) {
        if seq != self.events_seq {
            return;
        }
        match result {
            Ok(events) => {
                self.events_selected = self.events_selected.min(events.len().saturating_sub(1));
                self.events = FetchState::Loaded(events);
                self.last_update = Some(Utc::now());
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => self.events = FetchState::Errored(err.to_string()),
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.events.data()?.get(self.events_selected)
    }

    /// Step to the previous/next sport while staying on the events
    /// screen. Returns the new sport key when the switch happened.
    pub fn change_sport(&mut self, step: i64) -> Option<String> {
        let sports = self.sports.data()?;
        if sports.is_empty() {
            return None;
        }
        let len = sports.len() as i64;
        let next = (self.sports_selected as i64 + step).rem_euclid(len) as usize;
        self.sports_selected = next;
        let key = sports[next].sport_key.clone();
        self.sport_key = Some(key.clone());
        self.events_selected = 0;
        Some(key)
    }

    // === Detail screen ===

    pub fn enter_detail(&mut self, event_id: String) {
        self.screen = Screen::Detail;
        self.event_id = Some(event_id);
        self.detail = FetchState::Idle;
        self.history = FetchState::Idle;
        self.bookmaker_idx = None;
    }

    pub fn begin_detail_load(&mut self) {
        self.detail = FetchState::Loading;
    }

    /// Fold in a detail response. Returns true when a default bookmaker
    /// filter was just picked, meaning the history should be refetched
    /// with it.
    pub fn apply_detail(
        &mut self,
        event_id: &str,
        result: Result<EventDetail, OddsboardError>,
    ) -> bool {
        if self.event_id.as_deref() != Some(event_id) {
            return false;
        }
        match result {
            Ok(detail) => {
                let picked_default = self.bookmaker_idx.is_none() && !detail.current_odds.is_empty();
                if picked_default {
                    self.bookmaker_idx = Some(0);
                }
                self.detail = FetchState::Loaded(detail);
                self.last_update = Some(Utc::now());
                picked_default
            }
            Err(err) if err.is_cancelled() => false,
            Err(err) => {
                self.detail = FetchState::Errored(err.to_string());
                false
            }
        }
    }

    pub fn begin_history_load(&mut self) -> u64 {
        self.history_seq += 1;
        self.history = FetchState::Loading;
        self.history_seq
    }

    pub fn apply_history(&mut self, seq: u64, result: Result<OddsHistory, OddsboardError>) {
        if seq != self.history_seq {
            return;
        }
        match result {
            Ok(history) => {
                self.history = FetchState::Loaded(history);
                self.last_update = Some(Utc::now());
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => self.history = FetchState::Errored(err.to_string()),
        }
    }

    /// Key of the bookmaker currently filtering the history, if any
    pub fn bookmaker_key(&self) -> Option<&str> {
        let idx = self.bookmaker_idx?;
        let detail = self.detail.data()?;
        detail.current_odds.get(idx).map(|bm| bm.bookmaker_key.as_str())
    }

    /// Label shown in the chart title for the bookmaker filter
    pub fn bookmaker_label(&self) -> Option<&str> {
        let idx = self.bookmaker_idx?;
        let detail = self.detail.data()?;
        detail.current_odds.get(idx).map(|bm| bm.label())
    }

    pub fn cycle_market(&mut self) {
        self.market = self.market.next();
    }

    pub fn cycle_window(&mut self) {
        let pos = HOURS_CHOICES.iter().position(|&h| h == self.hours);
        self.hours = match pos {
            Some(i) => HOURS_CHOICES[(i + 1) % HOURS_CHOICES.len()],
            None => HOURS_CHOICES[0],
        };
    }

    /// All bookmakers -> each bookmaker of the snapshot -> back to all
    pub fn cycle_bookmaker(&mut self) {
        let count = self.detail.data().map_or(0, |d| d.current_odds.len());
        if count == 0 {
            self.bookmaker_idx = None;
            return;
        }
        self.bookmaker_idx = match self.bookmaker_idx {
            None => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            Some(_) => None,
        };
    }

    // === Navigation ===

    pub fn select_up(&mut self) {
        match self.screen {
            Screen::Sports => self.sports_selected = self.sports_selected.saturating_sub(1),
            Screen::Events => self.events_selected = self.events_selected.saturating_sub(1),
            Screen::Detail => {}
        }
    }

    pub fn select_down(&mut self) {
        match self.screen {
            Screen::Sports => {
                let len = self.sports.data().map_or(0, |s| s.len());
                if self.sports_selected + 1 < len {
                    self.sports_selected += 1;
                }
            }
            Screen::Events => {
                let len = self.events.data().map_or(0, |e| e.len());
                if self.events_selected + 1 < len {
                    self.events_selected += 1;
                }
            }
            Screen::Detail => {}
        }
    }

    /// Step back one screen. Returns true when the events screen was
    /// left, so the runner can cancel its in-flight fetch.
    pub fn go_back(&mut self) -> bool {
        match self.screen {
            Screen::Detail => {
                self.screen = Screen::Events;
                self.event_id = None;
                self.detail = FetchState::Idle;
                self.history = FetchState::Idle;
                self.bookmaker_idx = None;
                false
            }
            Screen::Events => {
                self.screen = Screen::Sports;
                self.sport_key = None;
                self.events = FetchState::Idle;
                true
            }
            Screen::Sports => false,
        }
    }
}
