mod alert;
mod all;
mod clock;
mod countdown;
mod footer;
mod header;
mod log;
mod weather;

use self::log::log;
use super::*;
use alert::alert;
use clock::clock;
use countdown::countdown;
use footer::footer;
use header::header;
use weather::weather;

use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders},
};

pub use all::all as render;

/// Return the bordered block for a dashboard panel.
///
fn panel_block<'a>(title: String, focused: bool, theme: &Theme) -> Block<'a> {
    let (border_style, title_style) = if focused {
        (
            styling::active_block_border_style(theme),
            styling::active_block_title_style(theme),
        )
    } else {
        (
            styling::normal_block_border_style(theme),
            styling::normal_text_style(theme),
        )
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", title), title_style))
}

/// Return a rect centered in `r` using the given percentages of its size.
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
