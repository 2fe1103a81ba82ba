mod alert;
mod app;
mod config;
mod error;
mod events;
mod i18n;
mod logger;
mod state;
mod ui;
mod weather;

use crate::app::App;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::logger::CustomLogger;
use anyhow::Result;
use clap::{crate_version, App as Cli, Arg, ArgMatches};
use std::sync::{mpsc, Mutex};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("multitimer")
        .version(crate_version!())
        .about("A terminal dashboard with a world clock, city weather and a countdown timer")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("city")
                .long("city")
                .value_name("CITY")
                .help("City to look up on start")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("lang")
                .short("l")
                .long("lang")
                .value_name("LANG")
                .possible_values(&["en", "vi"])
                .help("Interface language")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("timezone")
                .short("z")
                .long("timezone")
                .value_name("ZONE")
                .help("IANA timezone shown by the clock")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-key")
                .long("api-key")
                .value_name("KEY")
                .help("OpenWeatherMap API key")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Color theme")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("mute")
                .long("mute")
                .help("Do not ring the terminal bell when the countdown ends"),
        )
        .get_matches();

    let config = load_config(&matches)?;
    let log_receiver = register_logger(&config)?;
    if let Some(path) = config.file_path() {
        log::debug!("Using configuration file '{}'.", path.display());
    }
    App::start(config, log_receiver).await?;
    Ok(())
}

/// Load the configuration file and apply command line overrides.
///
fn load_config(matches: &ArgMatches) -> AppResult<Config> {
    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    if let Some(city) = matches.value_of("city") {
        config.default_city = city.trim().to_string();
    }
    if let Some(lang) = matches.value_of("lang") {
        config.set_language(lang)?;
    }
    if let Some(timezone) = matches.value_of("timezone") {
        config.timezone = timezone.to_string();
    }
    if let Some(api_key) = matches.value_of("api-key") {
        config.api_key = Some(api_key.to_string()).filter(|key| !key.trim().is_empty());
    }
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = theme.to_string();
    }
    if matches.is_present("mute") {
        config.sound = false;
    }

    config.validate()?;
    Ok(config)
}

/// Register the global logger and return the receiving end of its output.
///
fn register_logger(config: &Config) -> AppResult<mpsc::Receiver<String>> {
    let (tx, rx) = mpsc::channel();
    let logger: &'static CustomLogger = Box::leak(Box::new(CustomLogger::new(config.log_level)));
    let tx = Mutex::new(tx);
    logger.set_log_callback(Box::new(move |line| {
        if let Ok(tx) = tx.lock() {
            let _ = tx.send(line);
        }
    }));
    log::set_logger(logger).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(logger.level());
    Ok(rx)
}
