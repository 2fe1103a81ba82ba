use super::{alert, clock, countdown, footer, header, log, weather, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panels are laid side by side from this width, stacked below it.
///
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 96;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(9)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, rows[0], state);
    panels(frame, rows[1], state);
    if state.is_log_visible() {
        log(frame, rows[2], state);
    }
    footer(frame, rows[rows.len() - 1], state);

    if let Some(active) = state.alert() {
        alert(frame, size, active, state);
    }
}

fn panels(frame: &mut Frame, size: Rect, state: &State) {
    let direction = if size.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let columns = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(size);

    clock(frame, columns[0], state);
    weather(frame, columns[1], state);
    countdown(frame, columns[2], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{Condition, Snapshot, WeatherError};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn draw(state: &mut State, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn paris() -> Snapshot {
        Snapshot {
            city: "Paris".to_string(),
            temperature: 18.4,
            humidity: 70.0,
            wind_speed: 3.2,
            condition: Condition::Rain,
        }
    }

    #[test]
    fn renders_all_panels() {
        let mut state = State::default();
        state.apply_weather("Paris", Ok(paris()));
        let screen = draw(&mut state, 120, 30);
        assert!(screen.contains("Current Time"));
        assert!(screen.contains("Weather"));
        assert!(screen.contains("Countdown Timer"));
        assert!(screen.contains("Paris"));
        assert!(screen.contains("18°C"));
        assert!(screen.contains("70%"));
        assert!(screen.contains("3.2 m/s"));
        assert!(screen.contains("00:05:00"));
    }

    #[test]
    fn renders_in_vietnamese() {
        let mut state = State::default();
        state.toggle_language();
        state.toggle_log();
        let screen = draw(&mut state, 120, 30);
        assert!(screen.contains("Đếm Ngược"));
        assert!(screen.contains("Nhật Ký"));
        assert!(screen.contains("THƯỜNG:"));
        assert!(!screen.contains("NORMAL:"));
    }

    #[test]
    fn renders_lookup_failure_hint_with_snapshot() {
        let mut state = State::default();
        state.apply_weather("Paris", Ok(paris()));
        state.apply_weather("Atlantis", Err(WeatherError::EmptyCity));
        let screen = draw(&mut state, 120, 30);
        assert!(screen.contains("Paris"));
        assert!(screen.contains("City lookup failed"));
    }

    #[test]
    fn renders_alert_overlay() {
        let mut state = State::default();
        let start = Instant::now();
        state.enter_countdown_edit();
        state.remove_countdown_char().next_countdown_field();
        state.remove_countdown_char().next_countdown_field();
        state.remove_countdown_char().add_countdown_char('1');
        state.exit_countdown_edit();
        state.start_or_toggle_countdown(start);
        state.on_tick(start + Duration::from_secs(1), chrono::Utc::now());

        let screen = draw(&mut state, 120, 30);
        assert!(screen.contains("Time's Up!"));
        state.dismiss_alert();
        let screen = draw(&mut state, 120, 30);
        assert!(!screen.contains("Time's Up!"));
    }

    #[test]
    fn renders_stacked_on_narrow_terminals_with_log() {
        let mut state = State::default();
        state.toggle_log();
        state.add_log_entry("2026-10-19 20:30:05.000 INFO Starting application...".to_string());
        let screen = draw(&mut state, 60, 50);
        assert!(screen.contains("Starting application"));
        assert!(screen.contains("Countdown Timer"));
    }
}
