//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Ordinals run from the most severe (`Fatal = 0`) to the least severe
/// (`Trace = 5`), so a record at `level` passes a threshold when
/// `level <= threshold`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LogLevel {
    #[serde(rename = "FATAL")]
    Fatal = 0,
    #[serde(rename = "ERROR")]
    Error = 1,
    #[serde(rename = "WARN", alias = "WARNING")]
    Warning = 2,
    #[default]
    #[serde(rename = "INFO")]
    Info = 3,
    #[serde(rename = "DEBUG")]
    Debug = 4,
    #[serde(rename = "TRACE")]
    Trace = 5,
}

/// Display name used for ordinals outside the known scale.
pub const UNKNOWN_LEVEL_NAME: &str = "?";

impl LogLevel {
    /// Every level, most severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    #[inline]
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Display name for a raw ordinal, `?` when it is not on the scale.
    pub fn name_of(ordinal: u8) -> &'static str {
        Self::from_ordinal(ordinal)
            .map(|level| level.to_str())
            .unwrap_or(UNKNOWN_LEVEL_NAME)
    }

    /// Whether a record at `level` passes when `self` is the threshold.
    #[inline]
    pub fn allows(&self, level: LogLevel) -> bool {
        level <= *self
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Fatal => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Warning => Yellow,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working, e.g. `{:<5}`.
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
