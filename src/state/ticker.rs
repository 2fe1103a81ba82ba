//! Fixed-cadence tick scheduling.
//!
//! A [`Ticker`] never reads the wall clock itself. Callers pass the current
//! [`Instant`] in, so the terminal loop drives it with real time and tests
//! drive it with virtual time.

use std::time::{Duration, Instant};

pub const ONE_SECOND: Duration = Duration::from_secs(1);

/// Converts elapsed time into whole periods while armed.
///
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Ticker {
            period,
            next_due: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the ticker so the first period completes one period after `now`.
    /// Returns false if it was already armed.
    ///
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.is_armed() {
            return false;
        }
        self.next_due = Some(now + self.period);
        true
    }

    /// Disarm the ticker. Returns false if it was not armed.
    ///
    pub fn disarm(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    /// Return the number of whole periods completed up to `now` and advance
    /// the schedule past them.
    ///
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut count = 0;
        if let Some(mut next_due) = self.next_due {
            while next_due <= now {
                next_due += self.period;
                count += 1;
            }
            self.next_due = Some(next_due);
        }
        count
    }
}
