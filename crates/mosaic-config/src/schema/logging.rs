//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive scoping this level to the app's crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "mosaic=trace",
            LogLevel::Debug => "mosaic=debug",
            LogLevel::Info => "mosaic=info",
            LogLevel::Warn => "mosaic=warn",
            LogLevel::Error => "mosaic=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
