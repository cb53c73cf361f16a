//! Browser-backed implementations of the domain's logging, clock and
//! randomness abstractions.

use js_sys::Date;
use wasm_bindgen::JsValue;

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};
use crate::domain::random::RandomSource;

/// Writes entries to the devtools console at or above `min_level`.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let timestamp = get_time_provider().format_timestamp(entry.timestamp);
        let line = match &entry.metadata {
            Some(meta) => format!(
                "[{}] {} {}: {} | {}",
                timestamp, entry.level, entry.component, entry.message, meta
            ),
            None => format!("[{}] {} {}: {}", timestamp, entry.level, entry.component, entry.message),
        };
        let line = JsValue::from_str(&line);

        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Error => web_sys::console::error_1(&line),
        }
    }
}

/// `Date.now()` clock.
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = Date::new(&JsValue::from_f64(timestamp as f64));
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// `Math.random()` samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_f64(&self) -> f64 {
        js_sys::Math::random()
    }
}
