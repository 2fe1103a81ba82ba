//! Countdown timer state machine.
//!
//! The countdown moves between `Idle`, `Running` and `Paused`. Reaching zero
//! while running is the transient `Expired` transition: [`Countdown::tick`]
//! reports it once and the timer lands back in `Idle`.

use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Observable lifecycle of the countdown.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CountdownStatus {
    Idle,
    Running,
    Paused,
}

/// Emitted by [`Countdown::tick`] when the remaining time runs out.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Expired;

/// Editable fields of the countdown configuration.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CountdownField {
    Hours,
    Minutes,
    Seconds,
}

impl CountdownField {
    pub const ALL: [CountdownField; 3] = [
        CountdownField::Hours,
        CountdownField::Minutes,
        CountdownField::Seconds,
    ];

    /// Return the largest value the field accepts.
    ///
    pub fn max(&self) -> u32 {
        match self {
            CountdownField::Hours => 23,
            CountdownField::Minutes | CountdownField::Seconds => 59,
        }
    }

    pub fn next(&self) -> CountdownField {
        match self {
            CountdownField::Hours => CountdownField::Minutes,
            CountdownField::Minutes => CountdownField::Seconds,
            CountdownField::Seconds => CountdownField::Hours,
        }
    }

    pub fn previous(&self) -> CountdownField {
        match self {
            CountdownField::Hours => CountdownField::Seconds,
            CountdownField::Minutes => CountdownField::Hours,
            CountdownField::Seconds => CountdownField::Minutes,
        }
    }
}

/// Parse user input for a field. Leading digits are read and anything after
/// them ignored, input without leading digits counts as zero, and the result
/// is clamped to the field's range.
///
pub fn parse_field(input: &str, field: CountdownField) -> u32 {
    let digits: String = input
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    // Overlong input saturates before clamping
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    value.min(field.max() as u64) as u32
}

/// Format seconds as zero-padded `HH:MM:SS`. Hours are not wrapped.
///
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Duration chosen by the user before starting the countdown.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownConfig {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub seconds: u32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        CountdownConfig {
            hours: 0,
            minutes: 5,
            seconds: 0,
        }
    }
}

impl CountdownConfig {
    /// Return a configuration with every field clamped to its range.
    ///
    pub fn clamped(hours: u32, minutes: u32, seconds: u32) -> Self {
        CountdownConfig {
            hours: hours.min(CountdownField::Hours.max()),
            minutes: minutes.min(CountdownField::Minutes.max()),
            seconds: seconds.min(CountdownField::Seconds.max()),
        }
    }

    /// Return the value of a single field.
    ///
    pub fn get(&self, field: CountdownField) -> u32 {
        match field {
            CountdownField::Hours => self.hours,
            CountdownField::Minutes => self.minutes,
            CountdownField::Seconds => self.seconds,
        }
    }

    /// Return the configured duration in seconds.
    ///
    pub fn total_seconds(&self) -> u64 {
        self.hours as u64 * SECONDS_PER_HOUR
            + self.minutes as u64 * SECONDS_PER_MINUTE
            + self.seconds as u64
    }
}

/// Configured duration plus the runtime counter.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    config: CountdownConfig,
    remaining: u64,
    running: bool,
}

impl Countdown {
    pub fn new(config: CountdownConfig) -> Self {
        Countdown {
            config: CountdownConfig::clamped(config.hours, config.minutes, config.seconds),
            ..Countdown::default()
        }
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> CountdownStatus {
        match (self.is_running(), self.remaining()) {
            (true, _) => CountdownStatus::Running,
            (false, 0) => CountdownStatus::Idle,
            (false, _) => CountdownStatus::Paused,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status() == CountdownStatus::Idle
    }

    /// Store a new clamped configuration. Ignored unless idle.
    ///
    pub fn configure(&mut self, hours: u32, minutes: u32, seconds: u32) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.config = CountdownConfig::clamped(hours, minutes, seconds);
        true
    }

    /// Begin counting down the configured duration. Ignored unless idle.
    ///
    pub fn start(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.remaining = self.config.total_seconds();
        self.running = true;
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.running = false;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.running || self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Pause when running, resume when paused.
    ///
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause()
        } else {
            self.resume()
        }
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = 0;
    }

    /// Advance the countdown by one second.
    ///
    pub fn tick(&mut self) -> Option<Expired> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return Some(Expired);
        }
        None
    }

    pub fn remaining_text(&self) -> String {
        format_hms(self.remaining())
    }
}
