//! World clock state.

use crate::i18n::{self, Language};
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

/// Selectable timezone with its display label and flag.
///
#[derive(Debug, PartialEq, Eq)]
pub struct Zone {
    pub tz: Tz,
    pub label: &'static str,
    pub flag: &'static str,
}

impl Zone {
    /// Return the IANA identifier.
    ///
    pub fn id(&self) -> &'static str {
        self.tz.name()
    }
}

pub static ZONES: [Zone; 8] = [
    Zone {
        tz: chrono_tz::Asia::Ho_Chi_Minh,
        label: "Ho Chi Minh City",
        flag: "🇻🇳",
    },
    Zone {
        tz: chrono_tz::UTC,
        label: "UTC",
        flag: "🌐",
    },
    Zone {
        tz: chrono_tz::Europe::London,
        label: "London",
        flag: "🇬🇧",
    },
    Zone {
        tz: chrono_tz::Europe::Paris,
        label: "Paris",
        flag: "🇫🇷",
    },
    Zone {
        tz: chrono_tz::America::New_York,
        label: "New York",
        flag: "🇺🇸",
    },
    Zone {
        tz: chrono_tz::America::Los_Angeles,
        label: "Los Angeles",
        flag: "🇺🇸",
    },
    Zone {
        tz: chrono_tz::Asia::Tokyo,
        label: "Tokyo",
        flag: "🇯🇵",
    },
    Zone {
        tz: chrono_tz::Australia::Sydney,
        label: "Sydney",
        flag: "🇦🇺",
    },
];

/// Return the index in [`ZONES`] for an IANA identifier, ignoring case.
///
pub fn zone_index(id: &str) -> Option<usize> {
    ZONES
        .iter()
        .position(|zone| zone.id().eq_ignore_ascii_case(id.trim()))
}

/// Current instant and selected timezone.
///
#[derive(Debug, Clone)]
pub struct ClockState {
    now: DateTime<Utc>,
    zone_index: usize,
}

impl Default for ClockState {
    fn default() -> Self {
        ClockState::new(Utc::now(), 0)
    }
}

impl ClockState {
    pub fn new(now: DateTime<Utc>, zone_index: usize) -> Self {
        ClockState {
            now,
            zone_index: zone_index.min(ZONES.len() - 1),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Replace the displayed instant.
    ///
    pub fn refresh(&mut self, now: DateTime<Utc>) -> &mut Self {
        self.now = now;
        self
    }

    pub fn zone(&self) -> &'static Zone {
        &ZONES[self.zone_index]
    }

    /// Select a zone by IANA identifier. Returns false for unknown names.
    ///
    pub fn select_zone(&mut self, id: &str) -> bool {
        match zone_index(id) {
            Some(index) => {
                self.zone_index = index;
                true
            }
            None => false,
        }
    }

    pub fn next_zone(&mut self) -> &mut Self {
        self.zone_index = (self.zone_index + 1) % ZONES.len();
        self
    }

    pub fn previous_zone(&mut self) -> &mut Self {
        self.zone_index = (self.zone_index + ZONES.len() - 1) % ZONES.len();
        self
    }

    /// Return the time of day in the selected zone as 24-hour `HH:MM:SS`.
    ///
    pub fn time_text(&self) -> String {
        self.now
            .with_timezone(&self.zone().tz)
            .format("%H:%M:%S")
            .to_string()
    }

    /// Return the long date in the selected zone for the language.
    ///
    pub fn date_text(&self, language: Language) -> String {
        let local = self.now.with_timezone(&self.zone().tz);
        let weekday = i18n::weekday_name(language, local.weekday());
        let month = i18n::month_name(language, local.month());
        match language {
            Language::En => format!("{}, {} {}, {}", weekday, month, local.day(), local.year()),
            Language::Vi => format!("{}, {} {}, {}", weekday, local.day(), month, local.year()),
        }
    }
}
