//! HTTP client for weather provider requests.
//!
//! A thin wrapper around `reqwest` that appends the API key and metric units
//! to every query and turns non-success responses into [`WeatherError`]s.

use super::error::WeatherError;
use super::models::ErrorModel;
use log::*;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Makes requests to the provider and tries to conform response data to the
/// given model.
///
pub struct Client {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given API key and base URL. Every
    /// request is abandoned once `timeout` has passed.
    ///
    pub fn new(
        api_key: Option<&str>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        Ok(Client {
            api_key: api_key.map(|key| key.to_owned()),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// Make a GET request to the endpoint and deserialize the response body.
    ///
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;
        let request_url = format!("{}/{}", self.base_url, endpoint);

        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push(("appid", api_key));
        query.push(("units", "metric"));

        let response = self
            .http_client
            .get(&request_url)
            .query(&query)
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorModel>(&bytes)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned());
            warn!("Weather request failed with status {}: {}", status, message);
            return Err(WeatherError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_slice::<T>(&bytes) {
            Ok(model) => Ok(model),
            Err(e) => {
                error!(
                    "Failed to deserialize weather response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&bytes)
                );
                Err(e.into())
            }
        }
    }
}
