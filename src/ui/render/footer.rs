use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Mode, State};
use crate::ui::theme::ColorSpec;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode tag, its color and the hotkey hints for the footer. An
/// open alert takes over the footer in every mode.
///
fn controls(state: &State) -> (&'static str, ColorSpec, String) {
    let theme = state.get_theme();
    let keymap = state.get_keymap();
    let labels = state.labels();
    if state.alert().is_some() {
        return (
            labels.mode_alert,
            theme.footer_alert,
            build_footer_text(
                &keymap.dashboard,
                &[
                    (HotkeyAction::DismissAlert, labels.hint_dismiss, None),
                    (HotkeyAction::Quit, labels.hint_quit, None),
                ],
            ),
        );
    }
    match state.mode() {
        Mode::Search => (
            labels.mode_search,
            theme.footer_search,
            format!(
                " {}{}",
                labels.type_city,
                build_footer_text(
                    &keymap.search,
                    &[
                        (HotkeyAction::Submit, labels.hint_look_up, None),
                        (HotkeyAction::Cancel, labels.hint_cancel, None),
                    ],
                )
            ),
        ),
        Mode::CountdownEdit => (
            labels.mode_edit,
            theme.footer_edit,
            format!(
                " {}{}",
                labels.type_digits,
                build_footer_text(
                    &keymap.countdown_edit,
                    &[
                        (
                            HotkeyAction::NextField,
                            labels.hint_field,
                            Some(HotkeyAction::PrevField),
                        ),
                        (
                            HotkeyAction::Submit,
                            labels.hint_done,
                            Some(HotkeyAction::Cancel),
                        ),
                    ],
                )
            ),
        ),
        Mode::Dashboard => (
            labels.mode_normal,
            theme.footer_normal,
            build_footer_text(
                &keymap.dashboard,
                &[
                    (
                        HotkeyAction::NextPanel,
                        labels.hint_panel,
                        Some(HotkeyAction::PrevPanel),
                    ),
                    (HotkeyAction::ToggleLanguage, labels.hint_language, None),
                    (
                        HotkeyAction::NextTimezone,
                        labels.hint_timezone,
                        Some(HotkeyAction::PrevTimezone),
                    ),
                    (HotkeyAction::EnterSearch, labels.hint_search, None),
                    (HotkeyAction::EditCountdown, labels.hint_set_timer, None),
                    (
                        HotkeyAction::StartPauseCountdown,
                        labels.hint_start_pause,
                        None,
                    ),
                    (HotkeyAction::ResetCountdown, labels.hint_reset, None),
                    (HotkeyAction::ToggleLog, labels.hint_log, None),
                    (HotkeyAction::Quit, labels.hint_quit, None),
                ],
            ),
        ),
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let labels = state.labels();
    let (tag, tag_color, controls_text) = controls(state);

    let controls_content = Line::from(vec![
        Span::styled(
            tag,
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(tag_color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(controls_text, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![
        Span::styled(
            format!(" {} ", labels.made_with),
            Style::default().fg(theme.text_muted.to_color()),
        ),
        Span::styled("♥", Style::default().fg(theme.error.to_color())),
        Span::styled(
            format!(" {} ", labels.by),
            Style::default().fg(theme.text_muted.to_color()),
        ),
        Span::styled(
            format!("{} ", theme.name),
            Style::default().fg(theme.text_muted.to_color()),
        ),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.secondary.to_color()),
        ),
    ]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::countdown::CountdownField;
    use std::time::{Duration, Instant};

    #[test]
    fn hints_follow_active_language() {
        let mut state = State::default();
        let (tag, _, text) = controls(&state);
        assert_eq!(tag, "NORMAL:");
        assert!(text.contains("quit"));

        state.toggle_language();
        let (tag, _, text) = controls(&state);
        assert_eq!(tag, "THƯỜNG:");
        assert!(text.contains("thoát"));
        assert!(!text.contains("quit"));
    }

    #[test]
    fn alert_hints_show_in_search_mode() {
        let mut state = State::default();
        let start = Instant::now();
        state.enter_countdown_edit();
        for field in [
            CountdownField::Hours,
            CountdownField::Minutes,
            CountdownField::Seconds,
        ] {
            while state.countdown_field() != field {
                state.next_countdown_field();
            }
            state.remove_countdown_char();
        }
        state.start_or_toggle_countdown(start);
        state.enter_search();
        state.on_tick(start + Duration::from_secs(1), chrono::Utc::now());

        let (tag, _, text) = controls(&state);
        assert_eq!(tag, "ALERT:");
        assert!(text.contains("dismiss"));
    }
}
