//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log entries
//! and forwards them to the application state for display in the log panel.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

/// Crates whose records are capped at `warn` regardless of the configured level.
///
const NOISY_TARGETS: [&str; 3] = ["hyper", "reqwest", "mio"];

type LogCallback = Box<dyn Fn(String) + Send + Sync>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Mutex<Option<LogCallback>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Mutex::new(None),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn set_log_callback(&self, callback: LogCallback) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let noisy = NOISY_TARGETS
            .iter()
            .any(|target| metadata.target().starts_with(target));
        if noisy {
            metadata.level() <= Level::Warn && metadata.level() <= self.level
        } else {
            metadata.level() <= self.level
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{mpsc, Arc};

    fn metadata(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn respects_configured_level() {
        let logger = CustomLogger::new(LevelFilter::Info);
        assert!(logger.enabled(&metadata(Level::Error, "multitimer")));
        assert!(logger.enabled(&metadata(Level::Info, "multitimer")));
        assert!(!logger.enabled(&metadata(Level::Debug, "multitimer")));
    }

    #[test]
    fn caps_dependency_noise_at_warn() {
        let logger = CustomLogger::new(LevelFilter::Trace);
        assert!(logger.enabled(&metadata(Level::Warn, "hyper::proto")));
        assert!(!logger.enabled(&metadata(Level::Info, "hyper::proto")));
        assert!(!logger.enabled(&metadata(Level::Debug, "reqwest::connect")));
        assert!(logger.enabled(&metadata(Level::Trace, "multitimer::state")));
    }

    #[test]
    fn forwards_formatted_records_to_callback() {
        let logger = CustomLogger::new(LevelFilter::Debug);
        let (tx, rx) = mpsc::channel();
        let tx = Arc::new(Mutex::new(tx));
        logger.set_log_callback(Box::new(move |line| {
            if let Ok(tx) = tx.lock() {
                let _ = tx.send(line);
            }
        }));

        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("multitimer")
                .args(format_args!("lookup failed"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Trace)
                .target("multitimer")
                .args(format_args!("ignored"))
                .build(),
        );

        let line = rx.try_recv().unwrap();
        assert!(line.ends_with("ERROR lookup failed"));
        assert!(rx.try_recv().is_err());
    }
}
