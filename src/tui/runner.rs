//! Dashboard runner.
//!
//! Owns the terminal loop, the API client and the in-flight fetch
//! bookkeeping. Fetches run in spawned tasks and report back over an
//! mpsc channel; the events fetch additionally holds a cancel handle so
//! a sport switch or manual refresh aborts the previous request instead
//! of letting it race the new one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::adapters::{cancel_pair, CancelHandle, OddsServiceClient};
use crate::config::UiConfig;
use crate::error::Result;
use crate::tui::app::{App, Screen};
use crate::tui::event::{DataEvent, KeyAction};
use crate::tui::{init_terminal, restore_terminal, ui};

pub struct DashboardRunner {
    client: Arc<OddsServiceClient>,
    app: App,
    tx: mpsc::UnboundedSender<DataEvent>,
    rx: mpsc::UnboundedReceiver<DataEvent>,
    events_cancel: Option<CancelHandle>,
    tick: Duration,
}

impl DashboardRunner {
    pub fn new(client: OddsServiceClient, config: &UiConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            app: App::new(config.default_market, config.default_hours),
            tx,
            rx,
            events_cancel: None,
            tick: Duration::from_millis(config.tick_ms),
        }
    }

    /// Run the dashboard until the user quits
    pub async fn run(mut self) -> Result<()> {
        info!(base_url = %self.client.base_url(), "starting dashboard");
        let mut terminal = init_terminal()?;

        self.start_sports_fetch();

        loop {
            terminal.draw(|f| ui::render(f, &self.app))?;

            tokio::select! {
                _ = tokio::time::sleep(self.tick) => {
                    if crossterm::event::poll(Duration::from_millis(0)).unwrap_or(false) {
                        if let Ok(crossterm::event::Event::Key(key)) = crossterm::event::read() {
                            self.handle_key(key.into());
                        }
                    }
                }
                Some(event) = self.rx.recv() => {
                    self.apply_data(event);
                }
            }

            if !self.app.is_running() {
                break;
            }
        }

        // Abandon whatever is still in flight before leaving the screen.
        self.cancel_events();
        restore_terminal()?;
        info!("dashboard stopped");
        Ok(())
    }

    fn handle_key(&mut self, action: KeyAction) {
        if self.app.show_help {
            match action {
                KeyAction::Quit => self.app.quit(),
                _ => self.app.toggle_help(),
            }
            return;
        }

        match action {
            KeyAction::Quit => self.app.quit(),
            KeyAction::Help => self.app.toggle_help(),
            KeyAction::Up => self.app.select_up(),
            KeyAction::Down => self.app.select_down(),
            KeyAction::Select => self.open_selection(),
            KeyAction::Back => {
                if self.app.go_back() {
                    self.cancel_events();
                }
            }
            KeyAction::Refresh => self.refresh_screen(),
            KeyAction::PrevSport => self.switch_sport(-1),
            KeyAction::NextSport => self.switch_sport(1),
            KeyAction::CycleMarket if self.app.screen == Screen::Detail => {
                self.app.cycle_market();
                self.start_history_fetch();
            }
            KeyAction::CycleWindow if self.app.screen == Screen::Detail => {
                self.app.cycle_window();
                self.start_history_fetch();
            }
            KeyAction::CycleBookmaker if self.app.screen == Screen::Detail => {
                self.app.cycle_bookmaker();
                self.start_history_fetch();
            }
            _ => {}
        }
    }

    fn open_selection(&mut self) {
        match self.app.screen {
            Screen::Sports => {
                if let Some(sport) = self.app.selected_sport() {
                    let key = sport.sport_key.clone();
                    self.app.enter_events(key);
                    self.start_events_fetch();
                }
            }
            Screen::Events => {
                if let Some(event) = self.app.selected_event() {
                    let id = event.event_id.clone();
                    self.app.enter_detail(id);
                    // Detail and history race independently; either may
                    // land first.
                    self.start_detail_fetch();
                    self.start_history_fetch();
                }
            }
            Screen::Detail => {}
        }
    }

    fn refresh_screen(&mut self) {
        match self.app.screen {
            Screen::Sports => self.start_sports_fetch(),
            Screen::Events => self.start_events_fetch(),
            Screen::Detail => {
                self.start_detail_fetch();
                self.start_history_fetch();
            }
        }
    }

    fn switch_sport(&mut self, step: i64) {
        if self.app.screen != Screen::Events {
            return;
        }
        if self.app.change_sport(step).is_some() {
            self.start_events_fetch();
        }
    }

    fn apply_data(&mut self, event: DataEvent) {
        match event {
            DataEvent::Sports(result) => self.app.apply_sports(result),
            DataEvent::Events { seq, result } => self.app.apply_events(seq, result),
            DataEvent::Detail { event_id, result } => {
                // A freshly picked default bookmaker narrows the chart,
                // so refetch the history with it.
                if self.app.apply_detail(&event_id, result) {
                    self.start_history_fetch();
                }
            }
            DataEvent::History { seq, result } => self.app.apply_history(seq, result),
        }
    }

    fn start_sports_fetch(&mut self) {
        self.app.begin_sports_load();
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_sports().await;
            let _ = tx.send(DataEvent::Sports(result));
        });
    }

    /// Cancel whatever events fetch is in flight and start a new one for
    /// the current sport.
    fn start_events_fetch(&mut self) {
        self.cancel_events();

        let Some(sport_key) = self.app.sport_key.clone() else {
            return;
        };
        let seq = self.app.begin_events_load();
        let (handle, signal) = cancel_pair();
        self.events_cancel = Some(handle);

        debug!(%sport_key, seq, "fetching events");
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_events(&sport_key, signal).await;
            let _ = tx.send(DataEvent::Events { seq, result });
        });
    }

    fn cancel_events(&mut self) {
        if let Some(handle) = self.events_cancel.take() {
            handle.cancel();
        }
    }

    fn start_detail_fetch(&mut self) {
        let Some(event_id) = self.app.event_id.clone() else {
            return;
        };
        self.app.begin_detail_load();

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_event_detail(&event_id).await;
            let _ = tx.send(DataEvent::Detail { event_id, result });
        });
    }

    fn start_history_fetch(&mut self) {
        let Some(event_id) = self.app.event_id.clone() else {
            return;
        };
        let seq = self.app.begin_history_load();
        let market = self.app.market;
        let hours = self.app.hours;
        let bookmaker = self.app.bookmaker_key().map(str::to_string);

        debug!(%event_id, %market, hours, seq, "fetching history");
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client
                .fetch_event_history(&event_id, market, hours, bookmaker.as_deref())
                .await;
            let _ = tx.send(DataEvent::History { seq, result });
        });
    }
}
