//! Configuration management module.
//!
//! This module handles loading application configuration, including the
//! weather API key, default city, language, timezone, theme and hotkeys.
//! The configuration file is only ever read; nothing is written back.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::Keymap;
use hotkeys::KeymapOverrides;

use crate::error::AppError;
use crate::i18n::Language;
use crate::state::clock::zone_index;
use crate::state::countdown::CountdownConfig;
use crate::weather::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use log::LevelFilter;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/multitimer-tui";
const DEFAULT_CITY: &str = "Ho Chi Minh City";
const DEFAULT_TIMEZONE: &str = "Asia/Ho_Chi_Minh";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub request_timeout: Duration,
    pub default_city: String,
    pub language: Language,
    pub timezone: String,
    pub theme_name: String,
    pub countdown: CountdownConfig,
    pub log_level: LevelFilter,
    pub sound: bool,
    pub keymap: Keymap,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_sound")]
    pub sound: bool,
    #[serde(default)]
    pub hotkeys: KeymapOverrides,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_language() -> String {
    Language::En.code().to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sound() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            api_key: None,
            base_url: default_base_url(),
            request_timeout: DEFAULT_TIMEOUT,
            default_city: default_city(),
            language: Language::En,
            timezone: default_timezone(),
            theme_name: default_theme_name(),
            countdown: CountdownConfig::default(),
            log_level: LevelFilter::Info,
            sound: default_sound(),
            keymap: Keymap::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            return Ok(());
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        self.apply_yaml(&contents)?;
        Ok(())
    }

    /// Overwrite the configuration with the values of a YAML document.
    ///
    fn apply_yaml(&mut self, contents: &str) -> Result<(), AppError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;

        self.api_key = data.api_key.filter(|key| !key.trim().is_empty());
        self.base_url = data.base_url;
        self.request_timeout = Duration::from_secs(data.request_timeout_secs);
        self.default_city = data.default_city;
        self.set_language(&data.language)?;
        self.timezone = data.timezone;
        self.theme_name = data.theme_name;
        self.countdown = data.countdown;
        self.log_level = LevelFilter::from_str(&data.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(data.log_level.clone()))?;
        self.sound = data.sound;
        self.keymap = Keymap::default().with_overrides(data.hotkeys);
        self.validate()
    }

    /// Set the interface language from its code.
    ///
    pub fn set_language(&mut self, code: &str) -> Result<(), AppError> {
        self.language =
            Language::from_code(code).ok_or_else(|| ConfigError::UnknownLanguage(code.to_string()))?;
        Ok(())
    }

    /// Check values that can only be verified against bundled data.
    ///
    pub fn validate(&self) -> Result<(), AppError> {
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroRequestTimeout.into());
        }
        if zone_index(&self.timezone).is_none() {
            return Err(ConfigError::UnknownTimezone(self.timezone.clone()).into());
        }
        if crate::ui::Theme::from_name(&self.theme_name).is_none() {
            return Err(ConfigError::UnknownTheme(format!(
                "{} (available: {})",
                self.theme_name,
                crate::ui::Theme::available_themes().join(", ")
            ))
            .into());
        }
        Ok(())
    }

    /// Return the path of the configuration file, once resolved by `load`.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("multitimer-tui-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn load_without_file_keeps_defaults() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.default_city, "Ho Chi Minh City");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.timezone, "Asia/Ho_Chi_Minh");
        assert_eq!(config.countdown.total_seconds(), 300);
        assert!(config.api_key.is_none());
        assert_eq!(config.file_path(), Some(dir.join(FILE_NAME).as_path()));
        assert!(!dir.join(FILE_NAME).exists());
    }

    #[test]
    fn load_reads_file() {
        let dir = temp_dir();
        fs::write(
            dir.join(FILE_NAME),
            "api_key: abc123\n\
             default_city: Paris\n\
             language: vi\n\
             timezone: Europe/Paris\n\
             theme_name: dracula\n\
             countdown:\n  hours: 1\n  minutes: 30\n\
             log_level: debug\n\
             sound: false\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.default_city, "Paris");
        assert_eq!(config.language, Language::Vi);
        assert_eq!(config.timezone, "Europe/Paris");
        assert_eq!(config.theme_name, "dracula");
        assert_eq!(config.countdown.total_seconds(), 5400);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.sound);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn request_timeout_is_read_in_seconds() {
        let mut config = Config::new();
        config.apply_yaml("request_timeout_secs: 3\n").unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(matches!(
            Config::new().apply_yaml("request_timeout_secs: 0\n"),
            Err(AppError::Config(ConfigError::ZeroRequestTimeout))
        ));
    }

    #[test]
    fn blank_api_key_is_unset() {
        let mut config = Config::new();
        config.apply_yaml("api_key: '  '\n").unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn unknown_values_are_rejected() {
        let mut config = Config::new();
        assert!(matches!(
            config.apply_yaml("language: fr\n"),
            Err(AppError::Config(ConfigError::UnknownLanguage(_)))
        ));
        assert!(matches!(
            Config::new().apply_yaml("timezone: Mars/Base\n"),
            Err(AppError::Config(ConfigError::UnknownTimezone(_)))
        ));
        assert!(matches!(
            Config::new().apply_yaml("theme_name: neon\n"),
            Err(AppError::Config(ConfigError::UnknownTheme(_)))
        ));
        assert!(matches!(
            Config::new().apply_yaml("log_level: loud\n"),
            Err(AppError::Config(ConfigError::InvalidLogLevel(_)))
        ));
    }

    #[test]
    fn malformed_file_is_rejected() {
        let dir = temp_dir();
        fs::write(dir.join(FILE_NAME), "countdown: [1, 2").unwrap();
        let mut config = Config::new();
        assert!(matches!(
            config.load(dir.to_str()),
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }
}
