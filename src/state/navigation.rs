//! Navigation-related state types.
//!
//! This module contains enums describing which panel has focus and how key
//! presses are interpreted.

/// Specifying the dashboard panels.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Panel {
    Clock,
    Weather,
    Countdown,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Clock => Panel::Weather,
            Panel::Weather => Panel::Countdown,
            Panel::Countdown => Panel::Clock,
        }
    }

    pub fn previous(&self) -> Panel {
        match self {
            Panel::Clock => Panel::Countdown,
            Panel::Weather => Panel::Clock,
            Panel::Countdown => Panel::Weather,
        }
    }
}

/// Specifying how key presses are routed.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Dashboard,
    Search,        // Typing a city name
    CountdownEdit, // Typing countdown fields
}
