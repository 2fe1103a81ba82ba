use serde::Deserialize;

/// Body of a successful current-weather response. Fields the widget does not
/// display are ignored.
///
#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    #[serde(default)]
    pub weather: Vec<ConditionModel>,
    pub main: MainModel,
    pub wind: WindModel,
}

#[derive(Debug, Deserialize)]
pub struct ConditionModel {
    #[serde(default)]
    pub main: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MainModel {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct WindModel {
    pub speed: f64,
}

/// Body of an error response, e.g. `{"cod":"404","message":"city not found"}`.
///
#[derive(Debug, Deserialize)]
pub struct ErrorModel {
    #[serde(default)]
    pub message: Option<String>,
}
