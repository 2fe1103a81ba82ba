use crate::state::State;
use crate::weather::Weather;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LookupWeather { city: String },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    weather: &'a Weather,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, weather: &'a Weather) -> Self {
        Handler { state, weather }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::LookupWeather { city } => self.lookup_weather(city).await,
        }
        Ok(())
    }

    /// Update state with the weather for a city. The state lock is only held
    /// once the response is in.
    ///
    async fn lookup_weather(&mut self, city: String) {
        let result = self.weather.lookup(&city).await;
        if let Ok(snapshot) = &result {
            info!(
                "Received weather for '{}': {}, {}.",
                snapshot.city,
                snapshot.temperature_text(),
                snapshot.condition.icon()
            );
        }
        let mut state = self.state.lock().await;
        state.apply_weather(&city, result);
    }
}
