//! Log record handed to formatters

use super::log_level::LogLevel;
use super::value::Attr;
use chrono::{Local, NaiveDateTime};

/// Everything a formatter needs to render one line.
///
/// A record only borrows its parts; it lives for the duration of a single
/// emit call.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub time: NaiveDateTime,
    pub level: LogLevel,
    pub module: &'a str,
    pub message: &'a str,
    pub attrs: &'a [Attr],
}

impl<'a> Record<'a> {
    pub fn new(
        time: NaiveDateTime,
        level: LogLevel,
        module: &'a str,
        message: &'a str,
        attrs: &'a [Attr],
    ) -> Self {
        Self {
            time,
            level,
            module,
            message,
            attrs,
        }
    }

    /// Record stamped with the current local wall-clock time
    pub fn now(level: LogLevel, module: &'a str, message: &'a str, attrs: &'a [Attr]) -> Self {
        Self::new(Local::now().naive_local(), level, module, message, attrs)
    }
}
