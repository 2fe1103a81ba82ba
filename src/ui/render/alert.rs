use super::{centered_rect, Frame};
use crate::alert::Alert;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the alert overlay on top of the dashboard.
///
pub fn alert(frame: &mut Frame, size: Rect, alert: Alert, state: &State) {
    let theme = state.get_theme();
    let labels = state.labels();
    let message = match alert {
        Alert::TimeUp => labels.time_up,
    };

    let popup_area = centered_rect(40, 30, size);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(theme.error.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(labels.dismiss, styling::muted_text_style(theme))),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" ⏰ {} ", labels.countdown_timer),
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}
