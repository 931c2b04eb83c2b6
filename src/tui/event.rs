//! Event handling for the dashboard.
//!
//! Keyboard input is polled in the runner loop; completed fetches arrive
//! on an mpsc channel as data events, tagged with the request sequence
//! they belong to so stale responses can be recognized and dropped.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{Event, EventDetail, OddsHistory, Sport};
use crate::error::Result;

/// Completed fetch results delivered to the runner loop
#[derive(Debug)]
pub enum DataEvent {
    Sports(Result<Vec<Sport>>),
    Events { seq: u64, result: Result<Vec<Event>> },
    Detail { event_id: String, result: Result<EventDetail> },
    History { seq: u64, result: Result<OddsHistory> },
}

/// Key action derived from key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Move selection up
    Up,
    /// Move selection down
    Down,
    /// Open the selected item
    Select,
    /// Return to the previous screen
    Back,
    /// Cancel-and-restart the current screen's fetch
    Refresh,
    /// Switch to the previous sport without leaving the events screen
    PrevSport,
    /// Switch to the next sport without leaving the events screen
    NextSport,
    /// Cycle the charted market
    CycleMarket,
    /// Cycle the bookmaker filter
    CycleBookmaker,
    /// Cycle the lookback window
    CycleWindow,
    /// Show help
    Help,
    /// No action
    None,
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
            KeyCode::Enter | KeyCode::Right => KeyAction::Select,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => KeyAction::Back,
            KeyCode::Char('r') => KeyAction::Refresh,
            KeyCode::Char('[') => KeyAction::PrevSport,
            KeyCode::Char(']') => KeyAction::NextSport,
            KeyCode::Char('m') => KeyAction::CycleMarket,
            KeyCode::Char('b') => KeyAction::CycleBookmaker,
            KeyCode::Char('t') => KeyAction::CycleWindow,
            KeyCode::Char('?') => KeyAction::Help,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn navigation_keys_map() {
        assert_eq!(KeyAction::from(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(KeyAction::from(key(KeyCode::Enter)), KeyAction::Select);
        assert_eq!(KeyAction::from(key(KeyCode::Esc)), KeyAction::Back);
        assert_eq!(KeyAction::from(key(KeyCode::Char('r'))), KeyAction::Refresh);
        assert_eq!(KeyAction::from(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(KeyAction::from(event), KeyAction::Quit);
    }
}
