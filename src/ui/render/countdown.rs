use super::{panel_block, Frame};
use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::state::countdown::{format_hms, CountdownField, CountdownStatus};
use crate::state::{Mode, Panel, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the countdown panel. While idle it shows the configured duration
/// and its fields, otherwise the remaining time.
///
pub fn countdown(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let labels = state.labels();
    let countdown = state.countdown();
    let status = countdown.status();

    let readout = match status {
        CountdownStatus::Idle => format_hms(countdown.config().total_seconds()),
        CountdownStatus::Running | CountdownStatus::Paused => countdown.remaining_text(),
    };
    let readout_style = match status {
        CountdownStatus::Paused => styling::muted_text_style(theme),
        CountdownStatus::Running => styling::readout_style(theme).fg(theme.success.to_color()),
        CountdownStatus::Idle => styling::readout_style(theme),
    };

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(readout, readout_style)),
        Line::from(""),
    ];

    if status == CountdownStatus::Idle {
        text.push(Line::from(Span::styled(
            labels.set_timer,
            styling::muted_text_style(theme),
        )));
        text.push(field_line(state));
        text.push(Line::from(""));
    }

    let primary = match status {
        CountdownStatus::Running => labels.pause,
        CountdownStatus::Idle | CountdownStatus::Paused => labels.start,
    };
    text.push(Line::from(vec![
        button(state, HotkeyAction::StartPauseCountdown, primary),
        Span::raw("  "),
        button(state, HotkeyAction::ResetCountdown, labels.reset),
    ]));

    let block = panel_block(
        format!("⏱ {}", labels.countdown_timer),
        state.focus() == Panel::Countdown,
        theme,
    );
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, size);
}

/// Return the hours, minutes and seconds fields, highlighting the one being
/// edited.
///
fn field_line(state: &State) -> Line<'static> {
    let theme = state.get_theme();
    let labels = state.labels();
    let config = state.countdown().config();
    let editing = state.mode() == Mode::CountdownEdit;

    let mut spans = vec![];
    for field in CountdownField::ALL {
        let name = match field {
            CountdownField::Hours => labels.hours,
            CountdownField::Minutes => labels.minutes,
            CountdownField::Seconds => labels.seconds,
        };
        let value_style = if editing && state.countdown_field() == field {
            styling::selected_field_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{} ", name),
            styling::muted_text_style(theme),
        ));
        spans.push(Span::styled(
            format!("[{:02}]", config.get(field)),
            value_style,
        ));
    }
    Line::from(spans)
}

fn button(state: &State, action: HotkeyAction, label: &str) -> Span<'static> {
    let theme = state.get_theme();
    let text = match state.get_keymap().dashboard.get(&action) {
        Some(hotkey) => format!("[{}] {}", format_hotkey_display(hotkey), label),
        None => format!("[{}]", label),
    };
    Span::styled(text, Style::default().fg(theme.accent.to_color()))
}
