use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::error::{AppError, AppResult};
use crate::state::{Mode, State, StateError};
use chrono::Utc;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
/// The polling thread runs until the handler is dropped.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    stop: Arc<AtomicBool>,
    poller: Option<JoinHandle<()>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let poller = thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            while !stop_flag.load(Ordering::Relaxed) {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => warn!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => (),
                    Err(e) => warn!("Failed to poll terminal events: {}", e),
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler {
            rx,
            stop,
            poller: Some(poller),
        }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        let event = self
            .rx
            .recv()
            .map_err(|e| AppError::Terminal(e.to_string()))?;
        match event {
            Event::Input(event) => Ok(handle_key(&event, state, Instant::now())?),
            Event::Tick => {
                state.on_tick(Instant::now(), Utc::now());
                Ok(true)
            }
        }
    }
}

impl Drop for Handler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(poller) = self.poller.take() {
            if poller.join().is_err() {
                error!("Terminal event thread panicked.");
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(event: &KeyEvent, state: &mut State, at: Instant) -> Result<bool, StateError> {
    if event.kind != KeyEventKind::Press {
        return Ok(true);
    }

    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = event
    {
        debug!("Processing exit terminal event '{:?}'...", event);
        return Ok(false);
    }

    if state.alert().is_some()
        && get_action_for_event(event, Mode::Dashboard, state.get_keymap())
            == Some(HotkeyAction::DismissAlert)
    {
        state.dismiss_alert();
        return Ok(true);
    }

    let mode = state.mode();
    let action = get_action_for_event(event, mode, state.get_keymap());
    match mode {
        Mode::Dashboard => return Ok(handle_dashboard(event, action, state, at)),
        Mode::Search => handle_search(event, action, state)?,
        Mode::CountdownEdit => handle_countdown_edit(event, action, state),
    }
    Ok(true)
}

fn handle_dashboard(
    event: &KeyEvent,
    action: Option<HotkeyAction>,
    state: &mut State,
    at: Instant,
) -> bool {
    let action = match action {
        Some(action) => action,
        None => return true,
    };
    debug!("Processing '{:?}' for terminal event '{:?}'...", action, event);
    match action {
        HotkeyAction::Quit => return false,
        HotkeyAction::NextPanel => {
            state.next_panel();
        }
        HotkeyAction::PrevPanel => {
            state.previous_panel();
        }
        HotkeyAction::ToggleLanguage => {
            state.toggle_language();
        }
        HotkeyAction::NextTimezone => {
            state.next_timezone();
        }
        HotkeyAction::PrevTimezone => {
            state.previous_timezone();
        }
        HotkeyAction::EnterSearch => {
            state.enter_search();
        }
        HotkeyAction::EditCountdown => {
            if !state.enter_countdown_edit() {
                debug!("Countdown can only be edited while idle.");
            }
        }
        HotkeyAction::StartPauseCountdown => {
            state.start_or_toggle_countdown(at);
        }
        HotkeyAction::ResetCountdown => {
            state.reset_countdown();
        }
        HotkeyAction::ToggleLog => {
            state.toggle_log();
        }
        HotkeyAction::DismissAlert => {
            state.dismiss_alert();
        }
        HotkeyAction::Submit
        | HotkeyAction::Cancel
        | HotkeyAction::DeleteChar
        | HotkeyAction::NextField
        | HotkeyAction::PrevField => (),
    }
    true
}

fn handle_search(
    event: &KeyEvent,
    action: Option<HotkeyAction>,
    state: &mut State,
) -> Result<(), StateError> {
    match action {
        Some(HotkeyAction::Submit) => {
            state.submit_search()?;
        }
        Some(HotkeyAction::Cancel) => {
            state.cancel_search();
        }
        Some(HotkeyAction::DeleteChar) => {
            state.remove_search_char();
        }
        _ => {
            if let Some(c) = typed_char(event) {
                state.add_search_char(c);
            }
        }
    }
    Ok(())
}

fn handle_countdown_edit(event: &KeyEvent, action: Option<HotkeyAction>, state: &mut State) {
    match action {
        Some(HotkeyAction::Submit) | Some(HotkeyAction::Cancel) => {
            state.exit_countdown_edit();
        }
        Some(HotkeyAction::DeleteChar) => {
            state.remove_countdown_char();
        }
        Some(HotkeyAction::NextField) => {
            state.next_countdown_field();
        }
        Some(HotkeyAction::PrevField) => {
            state.previous_countdown_field();
        }
        _ => {
            if let Some(c) = typed_char(event) {
                state.add_countdown_char(c);
            }
        }
    }
}

/// Return the printable character of a key press without control modifiers.
///
fn typed_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(c)
            if !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Alert;
    use crate::i18n::Language;
    use crate::state::countdown::{CountdownField, CountdownStatus};
    use crate::state::Panel;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut State, text: &str, at: Instant) {
        for c in text.chars() {
            assert!(handle_key(&press(KeyCode::Char(c)), state, at).unwrap());
        }
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let mut state = State::default();
        assert!(!handle_key(&ctrl_c, &mut state, Instant::now()).unwrap());
        state.enter_search();
        assert!(!handle_key(&ctrl_c, &mut state, Instant::now()).unwrap());
    }

    #[test]
    fn q_quits_only_on_dashboard() {
        let mut state = State::default();
        let now = Instant::now();
        state.enter_search();
        assert!(handle_key(&press(KeyCode::Char('q')), &mut state, now).unwrap());
        assert_eq!(state.weather().search_input(), "q");
        handle_key(&press(KeyCode::Esc), &mut state, now).unwrap();
        assert!(!handle_key(&press(KeyCode::Char('q')), &mut state, now).unwrap());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut state = State::default();
        let release = KeyEvent {
            code: KeyCode::Char('g'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(handle_key(&release, &mut state, Instant::now()).unwrap());
        assert_eq!(state.language(), Language::En);
    }

    #[test]
    fn dashboard_hotkeys_route_to_state() {
        let mut state = State::default();
        let now = Instant::now();
        handle_key(&press(KeyCode::Char('g')), &mut state, now).unwrap();
        assert_eq!(state.language(), Language::Vi);

        handle_key(&press(KeyCode::Tab), &mut state, now).unwrap();
        assert_eq!(state.focus(), Panel::Weather);

        handle_key(&press(KeyCode::Char('z')), &mut state, now).unwrap();
        assert_eq!(state.clock().zone().id(), "UTC");
        handle_key(
            &KeyEvent::new(KeyCode::Char('Z'), KeyModifiers::SHIFT),
            &mut state,
            now,
        )
        .unwrap();
        assert_eq!(state.clock().zone().id(), "Asia/Ho_Chi_Minh");

        handle_key(
            &KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT),
            &mut state,
            now,
        )
        .unwrap();
        assert!(state.is_log_visible());
    }

    #[test]
    fn search_flow_typing_and_cancel() {
        let mut state = State::default();
        let now = Instant::now();
        handle_key(&press(KeyCode::Char('/')), &mut state, now).unwrap();
        assert_eq!(state.mode(), Mode::Search);
        type_text(&mut state, "Hanoi", now);
        handle_key(&press(KeyCode::Backspace), &mut state, now).unwrap();
        assert_eq!(state.weather().search_input(), "Hano");
        handle_key(&press(KeyCode::Esc), &mut state, now).unwrap();
        assert_eq!(state.mode(), Mode::Dashboard);
        assert_eq!(state.weather().search_input(), "");
    }

    #[test]
    fn countdown_edit_then_start_and_pause() {
        let mut state = State::default();
        let now = Instant::now();
        handle_key(&press(KeyCode::Char('e')), &mut state, now).unwrap();
        assert_eq!(state.mode(), Mode::CountdownEdit);
        assert_eq!(state.countdown_field(), CountdownField::Hours);
        handle_key(&press(KeyCode::Tab), &mut state, now).unwrap();
        handle_key(&press(KeyCode::Backspace), &mut state, now).unwrap();
        handle_key(&press(KeyCode::Tab), &mut state, now).unwrap();
        type_text(&mut state, "12", now);
        handle_key(&press(KeyCode::Enter), &mut state, now).unwrap();
        assert_eq!(state.mode(), Mode::Dashboard);
        assert_eq!(state.countdown().config().total_seconds(), 12);

        handle_key(&press(KeyCode::Char('s')), &mut state, now).unwrap();
        assert_eq!(state.countdown().status(), CountdownStatus::Running);
        handle_key(&press(KeyCode::Char('e')), &mut state, now).unwrap();
        assert_eq!(state.mode(), Mode::Dashboard);
        handle_key(&press(KeyCode::Char('s')), &mut state, now).unwrap();
        assert_eq!(state.countdown().status(), CountdownStatus::Paused);
        handle_key(&press(KeyCode::Char('r')), &mut state, now).unwrap();
        assert_eq!(state.countdown().status(), CountdownStatus::Idle);
    }

    #[test]
    fn enter_dismisses_alert() {
        let mut state = State::default();
        let start = Instant::now();
        state.enter_countdown_edit();
        for _ in 0..3 {
            handle_key(&press(KeyCode::Backspace), &mut state, start).unwrap();
            handle_key(&press(KeyCode::Tab), &mut state, start).unwrap();
        }
        handle_key(&press(KeyCode::Esc), &mut state, start).unwrap();
        handle_key(&press(KeyCode::Char('s')), &mut state, start).unwrap();
        state.on_tick(start + Duration::from_secs(1), Utc::now());
        assert_eq!(state.alert(), Some(Alert::TimeUp));

        handle_key(&press(KeyCode::Enter), &mut state, start).unwrap();
        assert!(state.alert().is_none());
    }

    #[test]
    fn enter_dismisses_alert_before_submitting_search() {
        let mut state = State::default();
        let start = Instant::now();
        state.enter_countdown_edit();
        for _ in 0..3 {
            handle_key(&press(KeyCode::Backspace), &mut state, start).unwrap();
            handle_key(&press(KeyCode::Tab), &mut state, start).unwrap();
        }
        handle_key(&press(KeyCode::Esc), &mut state, start).unwrap();
        handle_key(&press(KeyCode::Char('s')), &mut state, start).unwrap();
        handle_key(&press(KeyCode::Char('/')), &mut state, start).unwrap();
        type_text(&mut state, "Oslo", start);
        state.on_tick(start + Duration::from_secs(1), Utc::now());
        assert_eq!(state.alert(), Some(Alert::TimeUp));

        handle_key(&press(KeyCode::Enter), &mut state, start).unwrap();
        assert!(state.alert().is_none());
        assert_eq!(state.mode(), Mode::Search);
        assert_eq!(state.weather().search_input(), "Oslo");

        handle_key(&press(KeyCode::Enter), &mut state, start).unwrap();
        assert_eq!(state.mode(), Mode::Dashboard);
        assert_eq!(state.weather().search_input(), "");
    }
}
