//! Terminal user interface.
//!
//! Three screens over one application state: sport picker, event list
//! with best-price highlighting, and an event detail view with the
//! historical odds chart.

pub mod app;
pub mod data;
pub mod event;
pub mod runner;
pub mod theme;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use app::{App, Screen};
pub use data::FetchState;
pub use event::{DataEvent, KeyAction};
pub use runner::DashboardRunner;
pub use theme::Theme;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::adapters::OddsServiceClient;
use crate::config::UiConfig;
use crate::error::Result;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard against an odds service
pub async fn run_dashboard(client: OddsServiceClient, config: &UiConfig) -> Result<()> {
    DashboardRunner::new(client, config).run().await
}
