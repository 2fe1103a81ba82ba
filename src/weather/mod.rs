mod client;
mod error;
mod models;
mod resource;

pub use error::WeatherError;
pub use resource::*;

use client::Client;
use log::*;
use models::CurrentWeather;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Responsible for asynchronous interaction with the weather provider,
/// including transformation of response data into explicitly-defined types.
///
pub struct Weather {
    client: Client,
}

impl Weather {
    /// Returns a new instance for the given API key and provider base URL.
    ///
    pub fn new(
        api_key: Option<&str>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Weather, WeatherError> {
        debug!("Initializing weather client for {}...", base_url);
        if api_key.is_none() {
            warn!("No weather API key configured; lookups will fail.");
        }
        Ok(Weather {
            client: Client::new(api_key, base_url, timeout)?,
        })
    }

    /// Returns the current weather for the city. Issues exactly one request
    /// unless the city name is blank.
    ///
    pub async fn lookup(&self, city: &str) -> Result<Snapshot, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyCity);
        }
        debug!("Requesting current weather for '{}'...", city);

        let data: CurrentWeather = self.client.get("weather", &[("q", city)]).await?;

        Ok(Snapshot {
            city: data.name,
            temperature: data.main.temp,
            humidity: data.main.humidity,
            wind_speed: data.wind.speed,
            condition: Condition::from_main(
                data.weather.first().and_then(|w| w.main.as_deref()),
            ),
        })
    }
}
