//! Weather panel state: search box, active city and latest snapshot.

use crate::weather::{Snapshot, WeatherError};

/// Progress of the most recent lookup.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    Idle,
    Loading,
    Failed,
}

#[derive(Debug, Clone)]
pub struct WeatherPanel {
    snapshot: Option<Snapshot>,
    active_city: String,
    search_input: String,
    status: LookupStatus,
    pending: usize,
}

impl WeatherPanel {
    pub fn new(default_city: &str) -> Self {
        WeatherPanel {
            snapshot: None,
            active_city: default_city.trim().to_owned(),
            search_input: String::new(),
            status: LookupStatus::Idle,
            pending: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn active_city(&self) -> &str {
        &self.active_city
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn status(&self) -> &LookupStatus {
        &self.status
    }

    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.search_input.push(c);
        self
    }

    pub fn remove_search_char(&mut self) -> &mut Self {
        self.search_input.pop();
        self
    }

    pub fn clear_search(&mut self) -> &mut Self {
        self.search_input.clear();
        self
    }

    /// Take the trimmed search text for submission and clear the box. Blank
    /// input is left untouched and nothing is returned.
    ///
    pub fn take_search(&mut self) -> Option<String> {
        let city = self.search_input.trim();
        if city.is_empty() {
            return None;
        }
        let city = city.to_owned();
        self.search_input.clear();
        Some(city)
    }

    /// Record that a lookup was dispatched.
    ///
    pub fn begin_lookup(&mut self) -> &mut Self {
        self.pending += 1;
        self.status = LookupStatus::Loading;
        self
    }

    /// Apply the outcome of a lookup for `city`. A failure leaves the previous
    /// snapshot and active city untouched. The panel keeps loading while other
    /// lookups are still queued.
    ///
    pub fn apply_lookup(&mut self, city: &str, result: Result<Snapshot, WeatherError>) {
        self.pending = self.pending.saturating_sub(1);
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.active_city = city.to_owned();
                if self.pending == 0 {
                    self.status = LookupStatus::Idle;
                }
            }
            Err(_) => {
                if self.pending == 0 {
                    self.status = LookupStatus::Failed;
                }
            }
        }
    }
}
