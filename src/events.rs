//! Event System
//!
//! Log events flowing from the animated components to the UI footer and the
//! headless printer.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Component that emitted an event, derived from the log target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    Loader,
    Gate,
    Hero,
    Gallery,
    Reveal,
    App,
}

impl Source {
    /// Maps a `module_path!()` style log target onto a component.
    pub fn from_target(target: &str) -> Self {
        let module = target.split("::").nth(2).unwrap_or_default();
        match module {
            "loader" | "splash" => Source::Loader,
            "gate" => Source::Gate,
            "hero" => Source::Hero,
            "gallery" | "tilt" => Source::Gallery,
            "reveal" => Source::Reveal,
            _ => Source::App,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            log_level,
        }
    }

    pub fn should_display(&self) -> bool {
        // Warnings and errors are always shown
        if self.log_level >= LogLevel::Warn {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.source, self.timestamp, self.msg)
    }
}
