use super::{panel_block, Frame};
use crate::state::{Panel, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the clock panel for the selected timezone.
///
pub fn clock(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let labels = state.labels();
    let clock = state.clock();
    let zone = clock.zone();

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(clock.time_text(), styling::readout_style(theme))),
        Line::from(Span::styled(
            clock.date_text(state.language()),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("◀ {} {} ▶", zone.flag, zone.label),
            styling::muted_text_style(theme),
        )),
    ];

    let block = panel_block(
        format!("🕐 {}", labels.current_time),
        state.focus() == Panel::Clock,
        theme,
    );
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, size);
}
