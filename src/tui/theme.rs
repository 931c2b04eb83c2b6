//! Theme and color definitions for the dashboard.
//!
//! Cyan chrome, green home side, red away side.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the dashboard
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color
    pub border: Color,
    /// Title color
    pub title: Color,
    /// Home-slot series and cells
    pub home: Color,
    /// Away-slot series and cells
    pub away: Color,
    /// Best-price and accent color
    pub highlight: Color,
    /// Inactive/dim color
    pub inactive: Color,
    /// Normal text color
    pub text: Color,
    /// Error banner color
    pub error: Color,
    /// Live badge color
    pub live: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Cyan,
            title: Color::Cyan,
            home: Color::Green,
            away: Color::Red,
            highlight: Color::Yellow,
            inactive: Color::DarkGray,
            text: Color::White,
            error: Color::Red,
            live: Color::Magenta,
        }
    }
}

impl Theme {
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn home_style(&self) -> Style {
        Style::default().fg(self.home)
    }

    pub fn away_style(&self) -> Style {
        Style::default().fg(self.away)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    /// Best-price cells in the bookmakers table
    pub fn best_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn inactive_style(&self) -> Style {
        Style::default().fg(self.inactive)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn live_style(&self) -> Style {
        Style::default().fg(self.live).add_modifier(Modifier::BOLD)
    }

    /// Selected row in a list
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);
