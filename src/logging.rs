//! Log routing.
//!
//! Records from the `log` facade are turned into [`Event`]s and pushed into the
//! channel drained by the UI footer or the headless printer.

use crate::events::{Event, Source};
use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// `log::Log` backend sending records into the event channel.
///
/// Sending never blocks the render loop: when the channel is full the record
/// is dropped.
pub struct EventLogger {
    sender: mpsc::Sender<Event>,
    threshold: LogLevel,
}

impl EventLogger {
    pub fn new(sender: mpsc::Sender<Event>, threshold: LogLevel) -> Self {
        Self { sender, threshold }
    }
}

impl Log for EventLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let event = Event::new(
            Source::from_target(record.target()),
            record.args().to_string(),
            record.level().into(),
        );
        let _ = self.sender.try_send(event);
    }

    fn flush(&self) {}
}

/// Installs the event logger as the global logger, filtered by `RUST_LOG`.
pub fn init(sender: mpsc::Sender<Event>) -> Result<(), log::SetLoggerError> {
    let threshold = get_rust_log_level();
    log::set_boxed_logger(Box::new(EventLogger::new(sender, threshold)))
        .map(|()| log::set_max_level(threshold.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(parse_rust_log_level("surf=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("surf=debug,ratatui=info"),
            LogLevel::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }

    #[test]
    fn test_logger_forwards_records_above_threshold() {
        let (sender, mut receiver) = mpsc::channel(4);
        let logger = EventLogger::new(sender, LogLevel::Info);

        logger.log(
            &Record::builder()
                .args(format_args!("Loading gate opened after 6000ms"))
                .level(log::Level::Info)
                .target("surf::ui::gate")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("Reveal started for 4 tokens"))
                .level(log::Level::Debug)
                .target("surf::ui::reveal")
                .build(),
        );

        let event = receiver.try_recv().unwrap();
        assert_eq!(event.source, Source::Gate);
        assert_eq!(event.msg, "Loading gate opened after 6000ms");
        assert_eq!(event.log_level, LogLevel::Info);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_logger_drops_records_when_channel_full() {
        let (sender, mut receiver) = mpsc::channel(1);
        let logger = EventLogger::new(sender, LogLevel::Trace);
        for _ in 0..3 {
            logger.log(
                &Record::builder()
                    .args(format_args!("tick"))
                    .level(log::Level::Warn)
                    .target("surf::ui::app")
                    .build(),
            );
        }
        assert!(receiver.try_recv().is_ok());
        assert!(receiver.try_recv().is_err());
    }
}
