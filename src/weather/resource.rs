use fake::Dummy;

/// Defines the coarse weather category used to pick an icon.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq)]
pub enum Condition {
    Rain,
    Snow,
    Clouds,
    Clear,
}

impl Condition {
    /// Map the provider's main condition string, ignoring case. Anything
    /// unrecognised, including a missing value, is treated as clear.
    ///
    pub fn from_main(main: Option<&str>) -> Condition {
        match main.map(|m| m.trim().to_lowercase()).as_deref() {
            Some("rain") => Condition::Rain,
            Some("snow") => Condition::Snow,
            Some("clouds") => Condition::Clouds,
            _ => Condition::Clear,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Rain => "🌧",
            Condition::Snow => "❄",
            Condition::Clouds => "☁",
            Condition::Clear => "☀",
        }
    }
}

/// Defines the most recent successful weather lookup for a city.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Snapshot {
    pub city: String,
    pub temperature: f64, // °C
    pub humidity: f64,    // %
    pub wind_speed: f64,  // m/s
    pub condition: Condition,
}

impl Snapshot {
    /// Return the temperature rounded half-up to whole degrees.
    ///
    pub fn rounded_temperature(&self) -> i64 {
        (self.temperature + 0.5).floor() as i64
    }

    pub fn temperature_text(&self) -> String {
        format!("{}°C", self.rounded_temperature())
    }

    pub fn humidity_text(&self) -> String {
        format!("{}%", self.humidity)
    }

    pub fn wind_text(&self) -> String {
        format!("{} m/s", self.wind_speed)
    }
}
