use crate::ui::theme::Theme;
use ratatui::{style::Style, text::Span};

pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return the spinner frame for the index as a styled span.
///
pub fn spinner(index: usize, theme: &Theme) -> Span<'static> {
    Span::styled(
        FRAMES[index % FRAMES.len()],
        Style::default().fg(theme.info.to_color()),
    )
}
