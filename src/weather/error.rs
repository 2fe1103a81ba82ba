//! Weather provider error types.

/// Errors that can occur while looking up the weather for a city.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to deserialize provider response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Lookup attempted with a blank city name
    #[error("City name is empty")]
    EmptyCity,

    /// No API key configured
    #[error("No weather API key configured")]
    MissingApiKey,
}
