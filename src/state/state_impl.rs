use crate::alert::{Alert, Chime, Silent};
use crate::app::NetworkEventSender;
use crate::config::{Config, Keymap};
use crate::events::network::Event as NetworkEvent;
use crate::i18n::{self, Labels, Language};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use crate::weather::{Snapshot, WeatherError};
use chrono::{DateTime, Utc};
use log::*;
use std::time::Instant;

use super::clock::ClockState;
use super::countdown::{parse_field, Countdown, CountdownField, CountdownStatus};
use super::error::StateError;
use super::navigation::{Mode, Panel};
use super::ticker::{Ticker, ONE_SECOND};
use super::weather::WeatherPanel;

const MAX_LOG_ENTRIES: usize = 500;

/// Houses data representative of application state.
///
/// Each panel owns its state exclusively; the active language is the only
/// value shared between panels.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    chime: Box<dyn Chime>,
    language: Language,
    theme: Theme,
    keymap: Keymap,
    spinner_index: usize,
    focus: Panel,
    mode: Mode,
    clock: ClockState,
    clock_ticker: Ticker,
    weather: WeatherPanel,
    countdown: Countdown,
    countdown_ticker: Ticker,
    countdown_field: CountdownField,
    alert: Option<Alert>,
    log_visible: bool,
    log_entries: Vec<String>,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            chime: Box::new(Silent),
            language: Language::default(),
            theme: Theme::default(),
            keymap: Keymap::default(),
            spinner_index: 0,
            focus: Panel::Clock,
            mode: Mode::Dashboard,
            clock: ClockState::default(),
            clock_ticker: Ticker::new(ONE_SECOND),
            weather: WeatherPanel::new(&Config::new().default_city),
            countdown: Countdown::default(),
            countdown_ticker: Ticker::new(ONE_SECOND),
            countdown_field: CountdownField::Hours,
            alert: None,
            log_visible: false,
            log_entries: vec![],
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, config: &Config, chime: Box<dyn Chime>) -> Self {
        let mut clock = ClockState::default();
        if !clock.select_zone(&config.timezone) {
            warn!("Unknown timezone '{}', using '{}'.", config.timezone, clock.zone().id());
        }
        State {
            net_sender: Some(net_sender),
            chime,
            language: config.language,
            theme: Theme::from_name(&config.theme_name).unwrap_or_default(),
            keymap: config.keymap.clone(),
            clock,
            weather: WeatherPanel::new(&config.default_city),
            countdown: Countdown::new(config.countdown),
            ..State::default()
        }
    }

    /// Start the clock refresh and request weather for the default city. A
    /// blank default city issues no lookup.
    ///
    pub fn mount(&mut self, at: Instant) -> Result<(), StateError> {
        if self.clock_ticker.arm(at) {
            debug!("Clock refresh started.");
        }
        let city = self.weather.active_city().to_owned();
        if city.is_empty() {
            debug!("No default city configured; skipping weather lookup.");
            return Ok(());
        }
        self.request_weather(city)
    }

    /// Stop every repeating refresh.
    ///
    pub fn unmount(&mut self) {
        if self.clock_ticker.disarm() {
            debug!("Clock refresh stopped.");
        }
        self.countdown_ticker.disarm();
    }

    /// Advance the panels to the given moment. `at` drives the tickers and
    /// `now` is the wall-clock instant shown by the clock.
    ///
    pub fn on_tick(&mut self, at: Instant, now: DateTime<Utc>) {
        self.advance_spinner_index();

        if self.clock_ticker.due(at) > 0 {
            self.clock.refresh(now);
        }

        for _ in 0..self.countdown_ticker.due(at) {
            if self.countdown.tick().is_some() {
                self.on_countdown_expired();
                break;
            }
        }
    }

    fn on_countdown_expired(&mut self) {
        info!("Countdown finished.");
        self.countdown_ticker.disarm();
        self.alert = Some(Alert::TimeUp);
        if let Err(e) = self.chime.play() {
            debug!("Failed to play chime: {}", e);
        }
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the label set for the active language.
    ///
    pub fn labels(&self) -> &'static Labels {
        i18n::translate(self.language)
    }

    pub fn toggle_language(&mut self) -> &mut Self {
        self.language = self.language.next();
        debug!("Switched language to '{}'.", self.language.code());
        self
    }

    pub fn focus(&self) -> Panel {
        self.focus
    }

    pub fn next_panel(&mut self) -> &mut Self {
        self.focus = self.focus.next();
        self
    }

    pub fn previous_panel(&mut self) -> &mut Self {
        self.focus = self.focus.previous();
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    pub fn next_timezone(&mut self) -> &mut Self {
        self.clock.next_zone();
        self
    }

    pub fn previous_timezone(&mut self) -> &mut Self {
        self.clock.previous_zone();
        self
    }

    pub fn weather(&self) -> &WeatherPanel {
        &self.weather
    }

    /// Focus the weather search box.
    ///
    pub fn enter_search(&mut self) -> &mut Self {
        self.focus = Panel::Weather;
        self.mode = Mode::Search;
        self
    }

    /// Leave the search box, discarding its text.
    ///
    pub fn cancel_search(&mut self) -> &mut Self {
        self.weather.clear_search();
        self.mode = Mode::Dashboard;
        self
    }

    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.weather.add_search_char(c);
        self
    }

    pub fn remove_search_char(&mut self) -> &mut Self {
        self.weather.remove_search_char();
        self
    }

    /// Submit the search box. Blank input is ignored and returns false.
    ///
    pub fn submit_search(&mut self) -> Result<bool, StateError> {
        match self.weather.take_search() {
            Some(city) => {
                self.mode = Mode::Dashboard;
                self.request_weather(city)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Queue a weather lookup for the city.
    ///
    pub fn request_weather(&mut self, city: String) -> Result<(), StateError> {
        info!("Looking up weather for '{}'...", city);
        self.weather.begin_lookup();
        self.dispatch(NetworkEvent::LookupWeather { city })
    }

    /// Apply the outcome of a weather lookup.
    ///
    pub fn apply_weather(&mut self, city: &str, result: Result<Snapshot, WeatherError>) {
        if let Err(e) = &result {
            error!("Error fetching weather for '{}': {}", city, e);
        }
        self.weather.apply_lookup(city, result);
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn countdown_field(&self) -> CountdownField {
        self.countdown_field
    }

    /// Edit the countdown fields. Only possible while the countdown is idle.
    ///
    pub fn enter_countdown_edit(&mut self) -> bool {
        if !self.countdown.is_idle() {
            return false;
        }
        self.focus = Panel::Countdown;
        self.mode = Mode::CountdownEdit;
        true
    }

    pub fn exit_countdown_edit(&mut self) -> &mut Self {
        self.mode = Mode::Dashboard;
        self
    }

    pub fn next_countdown_field(&mut self) -> &mut Self {
        self.countdown_field = self.countdown_field.next();
        self
    }

    pub fn previous_countdown_field(&mut self) -> &mut Self {
        self.countdown_field = self.countdown_field.previous();
        self
    }

    /// Append a typed character to the selected field.
    ///
    pub fn add_countdown_char(&mut self, c: char) -> &mut Self {
        let field = self.countdown_field;
        let typed = format!("{}{}", self.countdown.config().get(field), c);
        self.set_countdown_field(field, parse_field(&typed, field));
        self
    }

    /// Drop the last digit of the selected field.
    ///
    pub fn remove_countdown_char(&mut self) -> &mut Self {
        let field = self.countdown_field;
        let value = self.countdown.config().get(field) / 10;
        self.set_countdown_field(field, value);
        self
    }

    fn set_countdown_field(&mut self, field: CountdownField, value: u32) {
        let mut config = *self.countdown.config();
        match field {
            CountdownField::Hours => config.hours = value,
            CountdownField::Minutes => config.minutes = value,
            CountdownField::Seconds => config.seconds = value,
        }
        self.countdown
            .configure(config.hours, config.minutes, config.seconds);
    }

    /// Start the countdown from idle, otherwise pause or resume it.
    ///
    pub fn start_or_toggle_countdown(&mut self, at: Instant) -> &mut Self {
        self.mode = Mode::Dashboard;
        if self.countdown.is_idle() {
            if self.countdown.start() {
                info!(
                    "Countdown started for {}.",
                    self.countdown.remaining_text()
                );
            }
        } else {
            self.countdown.toggle();
        }
        match self.countdown.status() {
            CountdownStatus::Running => {
                self.countdown_ticker.arm(at);
            }
            CountdownStatus::Paused | CountdownStatus::Idle => {
                self.countdown_ticker.disarm();
            }
        }
        self
    }

    pub fn reset_countdown(&mut self) -> &mut Self {
        self.countdown.reset();
        self.countdown_ticker.disarm();
        self
    }

    pub fn alert(&self) -> Option<Alert> {
        self.alert
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    /// Append a formatted log line, keeping only the most recent entries.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        self.log_entries.push(entry);
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            let excess = self.log_entries.len() - MAX_LOG_ENTRIES;
            self.log_entries.drain(..excess);
        }
    }

    pub fn get_log_entries(&self) -> &[String] {
        &self.log_entries
    }

    /// Send an event to the networking worker.
    ///
    fn dispatch(&mut self, event: NetworkEvent) -> Result<(), StateError> {
        if let Some(net_sender) = &self.net_sender {
            if let Err(err) = net_sender.send(event) {
                error!("Received error from network dispatch: {}", err);
                return Err(StateError::NetworkChannelClosed);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::weather::LookupStatus;
    use fake::{Fake, Faker};
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc};
    use std::time::Duration;

    struct CountingChime {
        plays: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Chime for CountingChime {
        fn play(&self) -> io::Result<()> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(io::Error::new(io::ErrorKind::Other, "no audio device"))
            } else {
                Ok(())
            }
        }
    }

    fn state_with_chime(fail: bool) -> (State, Arc<AtomicUsize>) {
        let plays = Arc::new(AtomicUsize::new(0));
        let state = State {
            chime: Box::new(CountingChime {
                plays: Arc::clone(&plays),
                fail,
            }),
            ..State::default()
        };
        (state, plays)
    }

    fn connected_state() -> (State, mpsc::Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(tx, &Config::new(), Box::new(Silent));
        (state, rx)
    }

    fn seconds(start: Instant, n: u64) -> Instant {
        start + Duration::from_secs(n)
    }

    fn configure(state: &mut State, hours: u32, minutes: u32, seconds: u32) {
        assert!(state.enter_countdown_edit());
        for (field, value) in [
            (CountdownField::Hours, hours),
            (CountdownField::Minutes, minutes),
            (CountdownField::Seconds, seconds),
        ] {
            state.countdown_field = field;
            state.set_countdown_field(field, value);
        }
        state.exit_countdown_edit();
    }

    #[test]
    fn mount_requests_default_city() {
        let (mut state, rx) = connected_state();
        state.mount(Instant::now()).unwrap();
        match rx.try_recv() {
            Ok(NetworkEvent::LookupWeather { city }) => assert_eq!(city, "Ho Chi Minh City"),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn mount_with_blank_default_city_requests_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut config = Config::new();
        config.default_city = "   ".to_string();
        config.validate().unwrap();
        let mut state = State::new(tx, &config, Box::new(Silent));
        state.mount(Instant::now()).unwrap();
        assert!(rx.try_recv().is_err());
        assert_eq!(*state.weather().status(), LookupStatus::Idle);
    }

    #[test]
    fn clock_refreshes_once_per_second_while_mounted() {
        let (mut state, _rx) = connected_state();
        let start = Instant::now();
        let wall = Utc::now();
        state.mount(start).unwrap();

        state.on_tick(start + Duration::from_millis(500), wall + chrono::Duration::seconds(30));
        assert_ne!(state.clock().now(), wall + chrono::Duration::seconds(30));

        state.on_tick(seconds(start, 1), wall + chrono::Duration::seconds(1));
        assert_eq!(state.clock().now(), wall + chrono::Duration::seconds(1));

        state.unmount();
        state.on_tick(seconds(start, 5), wall + chrono::Duration::seconds(5));
        assert_eq!(state.clock().now(), wall + chrono::Duration::seconds(1));
    }

    #[test]
    fn mount_twice_keeps_one_schedule() {
        let (mut state, _rx) = connected_state();
        let start = Instant::now();
        state.mount(start).unwrap();
        state.mount(start + Duration::from_millis(700)).unwrap();
        assert_eq!(state.clock_ticker.due(seconds(start, 1)), 1);
    }

    #[test]
    fn five_second_countdown_alerts_once() {
        let (mut state, plays) = state_with_chime(false);
        let start = Instant::now();
        configure(&mut state, 0, 0, 5);
        state.start_or_toggle_countdown(start);
        assert_eq!(state.countdown().remaining(), 5);

        for n in 1..=4 {
            state.on_tick(seconds(start, n), Utc::now());
            assert!(state.alert().is_none());
        }
        state.on_tick(seconds(start, 5), Utc::now());
        assert_eq!(state.countdown().remaining(), 0);
        assert!(!state.countdown().is_running());
        assert_eq!(state.alert(), Some(Alert::TimeUp));
        assert_eq!(plays.load(Ordering::SeqCst), 1);

        for n in 6..=10 {
            state.on_tick(seconds(start, n), Utc::now());
        }
        assert_eq!(plays.load(Ordering::SeqCst), 1);
        assert!(state.dismiss_alert());
        assert!(!state.dismiss_alert());
    }

    #[test]
    fn late_tick_catches_up_without_going_negative() {
        let (mut state, plays) = state_with_chime(false);
        let start = Instant::now();
        configure(&mut state, 0, 0, 3);
        state.start_or_toggle_countdown(start);
        state.on_tick(seconds(start, 10), Utc::now());
        assert_eq!(state.countdown().remaining(), 0);
        assert_eq!(plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn zero_countdown_expires_on_first_tick() {
        let (mut state, plays) = state_with_chime(false);
        let start = Instant::now();
        configure(&mut state, 0, 0, 0);
        state.start_or_toggle_countdown(start);
        assert_eq!(state.countdown().remaining(), 0);
        state.on_tick(seconds(start, 1), Utc::now());
        assert_eq!(state.alert(), Some(Alert::TimeUp));
        assert_eq!(plays.load(Ordering::SeqCst), 1);
        assert_eq!(state.countdown().status(), CountdownStatus::Idle);
    }

    #[test]
    fn chime_failure_still_alerts() {
        let (mut state, plays) = state_with_chime(true);
        let start = Instant::now();
        configure(&mut state, 0, 0, 1);
        state.start_or_toggle_countdown(start);
        state.on_tick(seconds(start, 1), Utc::now());
        assert_eq!(plays.load(Ordering::SeqCst), 1);
        assert_eq!(state.alert(), Some(Alert::TimeUp));
    }

    #[test]
    fn paused_countdown_does_not_tick() {
        let (mut state, _plays) = state_with_chime(false);
        let start = Instant::now();
        configure(&mut state, 0, 1, 0);
        state.start_or_toggle_countdown(start);
        state.on_tick(seconds(start, 2), Utc::now());
        assert_eq!(state.countdown().remaining(), 58);

        state.start_or_toggle_countdown(seconds(start, 2));
        assert_eq!(state.countdown().status(), CountdownStatus::Paused);
        state.on_tick(seconds(start, 30), Utc::now());
        assert_eq!(state.countdown().remaining(), 58);

        state.start_or_toggle_countdown(seconds(start, 30));
        state.on_tick(seconds(start, 31), Utc::now());
        assert_eq!(state.countdown().remaining(), 57);
    }

    #[test]
    fn start_pause_resume_reset_ends_idle() {
        let (mut state, _plays) = state_with_chime(false);
        let start = Instant::now();
        configure(&mut state, 0, 0, 45);
        state.start_or_toggle_countdown(start);
        state.on_tick(seconds(start, 3), Utc::now());
        state.start_or_toggle_countdown(seconds(start, 3));
        state.start_or_toggle_countdown(seconds(start, 4));
        state.reset_countdown();
        assert_eq!(state.countdown().status(), CountdownStatus::Idle);
        assert_eq!(state.countdown().remaining(), 0);
        state.on_tick(seconds(start, 60), Utc::now());
        assert!(state.alert().is_none());
    }

    #[test]
    fn countdown_edit_only_when_idle() {
        let (mut state, _plays) = state_with_chime(false);
        assert!(state.enter_countdown_edit());
        assert_eq!(state.mode(), Mode::CountdownEdit);
        state.start_or_toggle_countdown(Instant::now());
        assert_eq!(state.mode(), Mode::Dashboard);
        assert!(!state.enter_countdown_edit());
        state.reset_countdown();
        assert!(state.enter_countdown_edit());
    }

    #[test]
    fn typing_countdown_fields() {
        let mut state = State::default();
        state.enter_countdown_edit();
        state.countdown_field = CountdownField::Minutes;
        // Default minutes is 5
        state.add_countdown_char('1');
        assert_eq!(state.countdown().config().minutes, 51);
        state.add_countdown_char('9');
        assert_eq!(state.countdown().config().minutes, 59);
        state.remove_countdown_char();
        assert_eq!(state.countdown().config().minutes, 5);
        state.add_countdown_char('x');
        assert_eq!(state.countdown().config().minutes, 5);

        state.next_countdown_field();
        state.remove_countdown_char();
        state.add_countdown_char('7');
        assert_eq!(state.countdown().config().seconds, 7);

        state.next_countdown_field();
        assert_eq!(state.countdown_field(), CountdownField::Hours);
        state.add_countdown_char('3');
        state.add_countdown_char('0');
        assert_eq!(state.countdown().config().hours, 23);
    }

    #[test]
    fn submit_search_dispatches_lookup() {
        let (mut state, rx) = connected_state();
        state.enter_search();
        for c in " Paris ".chars() {
            state.add_search_char(c);
        }
        assert!(state.submit_search().unwrap());
        assert_eq!(state.mode(), Mode::Dashboard);
        assert_eq!(state.weather().search_input(), "");
        match rx.try_recv() {
            Ok(NetworkEvent::LookupWeather { city }) => assert_eq!(city, "Paris"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn blank_search_is_a_no_op() {
        let (mut state, rx) = connected_state();
        let snapshot: Snapshot = Faker.fake();
        state.apply_weather("Ho Chi Minh City", Ok(snapshot.clone()));
        state.enter_search();
        state.add_search_char(' ');
        assert!(!state.submit_search().unwrap());
        assert!(rx.try_recv().is_err());
        assert_eq!(state.weather().snapshot(), Some(&snapshot));
        assert_eq!(state.mode(), Mode::Search);
    }

    #[test]
    fn failed_lookup_keeps_snapshot() {
        let mut state = State::default();
        let snapshot: Snapshot = Faker.fake();
        state.apply_weather("Ho Chi Minh City", Ok(snapshot.clone()));
        state.apply_weather(
            "Atlantis",
            Err(WeatherError::ApiError {
                status: 404,
                message: "city not found".to_string(),
            }),
        );
        assert_eq!(state.weather().snapshot(), Some(&snapshot));
        assert_eq!(state.weather().active_city(), "Ho Chi Minh City");
    }

    #[test]
    fn closed_network_channel_is_reported() {
        let (mut state, rx) = connected_state();
        drop(rx);
        assert!(matches!(
            state.request_weather("Paris".to_string()),
            Err(StateError::NetworkChannelClosed)
        ));
    }

    #[test]
    fn toggle_language_changes_labels() {
        let mut state = State::default();
        assert_eq!(state.labels().weather, "Weather");
        state.toggle_language();
        assert_eq!(state.language(), Language::Vi);
        assert_eq!(state.labels().weather, "Thời Tiết");
    }

    #[test]
    fn new_uses_config() {
        let (tx, _rx) = mpsc::channel();
        let mut config = Config::new();
        config.language = Language::Vi;
        config.timezone = "Asia/Tokyo".to_string();
        config.default_city = "Osaka".to_string();
        let state = State::new(tx, &config, Box::new(Silent));
        assert_eq!(state.language(), Language::Vi);
        assert_eq!(state.clock().zone().id(), "Asia/Tokyo");
        assert_eq!(state.weather().active_city(), "Osaka");
        assert_eq!(state.get_theme().name, "tokyo-night");
    }

    #[test]
    fn panel_focus_cycles() {
        let mut state = State::default();
        assert_eq!(state.focus(), Panel::Clock);
        state.next_panel();
        assert_eq!(state.focus(), Panel::Weather);
        state.previous_panel().previous_panel();
        assert_eq!(state.focus(), Panel::Countdown);
    }

    #[test]
    fn log_entries_are_capped() {
        let mut state = State::default();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            state.add_log_entry(format!("entry {}", i));
        }
        assert_eq!(state.get_log_entries().len(), MAX_LOG_ENTRIES);
        assert_eq!(state.get_log_entries()[0], "entry 10");
    }

    #[test]
    fn advance_spinner_index_wraps() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(*state.get_spinner_index(), 0);
    }
}
