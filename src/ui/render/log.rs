use super::{panel_block, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
};

/// Render the most recent log entries that fit the panel.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let entries = state.get_log_entries();
    let visible = size.height.saturating_sub(2) as usize;
    let start = entries.len().saturating_sub(visible);

    let items: Vec<ListItem> = entries[start..]
        .iter()
        .map(|entry| {
            let style = if entry.contains(" ERROR ") {
                Style::default().fg(theme.error.to_color())
            } else if entry.contains(" WARN ") {
                Style::default().fg(theme.warning.to_color())
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(Span::styled(entry.as_str(), style)))
        })
        .collect();

    let title = state.labels().log_title.to_string();
    let list = List::new(items).block(panel_block(title, false, theme));
    frame.render_widget(list, size);
}
