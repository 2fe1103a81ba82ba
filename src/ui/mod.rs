//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Dashboard layout (header, clock, weather and countdown panels, footer)
//! - Theme management
//! - Widget components (spinner, styling)
//! - The log panel and the alert overlay

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::Theme;
