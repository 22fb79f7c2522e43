//! Fallback configuration and the process-wide default logger
//!
//! A [`Defaults`] context holds the threshold and outputs used by every
//! logger that has not set its own. Applications can create their own
//! context and inject it with [`Logger::with_defaults`]; loggers built with
//! [`Logger::new`] share the process-wide context returned by
//! [`global_defaults`].
//!
//! The process-wide state is meant to be configured at startup, before
//! loggers are used from several threads. Later changes are safe but only
//! visible to emit calls that begin after the setter returns.

use super::formatter::LineFormatter;
use super::log_level::LogLevel;
use super::logger::{Log, Logger};
use super::output::Output;
use super::value::Attr;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Module name of the process-wide default logger
pub const MAIN_MODULE: &str = "main";

/// Threshold and outputs used by loggers that have not set their own
pub struct Defaults {
    level: RwLock<LogLevel>,
    outputs: RwLock<Arc<[Output]>>,
}

impl Defaults {
    /// `Info` threshold, human-readable lines on standard output
    pub fn new() -> Self {
        Self::with(LogLevel::Info, vec![Output::stdout(LineFormatter::new())])
    }

    pub fn with(level: LogLevel, outputs: Vec<Output>) -> Self {
        Self {
            level: RwLock::new(level),
            outputs: RwLock::new(Arc::from(outputs)),
        }
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn outputs(&self) -> Arc<[Output]> {
        Arc::clone(&self.outputs.read())
    }

    /// Replace the default outputs. An empty list silences every logger
    /// that relies on them.
    pub fn set_outputs(&self, outputs: Vec<Output>) {
        *self.outputs.write() = Arc::from(outputs);
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Defaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defaults")
            .field("level", &self.level())
            .field("outputs", &self.outputs())
            .finish()
    }
}

static GLOBAL_DEFAULTS: LazyLock<Arc<Defaults>> = LazyLock::new(|| Arc::new(Defaults::new()));

static DEFAULT_LOGGER: LazyLock<RwLock<Arc<dyn Log>>> = LazyLock::new(|| {
    RwLock::new(Arc::new(Logger::with_defaults(
        MAIN_MODULE,
        Arc::clone(&GLOBAL_DEFAULTS),
    )))
});

/// The process-wide defaults context
pub fn global_defaults() -> Arc<Defaults> {
    Arc::clone(&GLOBAL_DEFAULTS)
}

pub fn default_level() -> LogLevel {
    GLOBAL_DEFAULTS.level()
}

pub fn set_default_level(level: LogLevel) {
    GLOBAL_DEFAULTS.set_level(level);
}

pub fn default_outputs() -> Arc<[Output]> {
    GLOBAL_DEFAULTS.outputs()
}

pub fn set_default_outputs(outputs: Vec<Output>) {
    GLOBAL_DEFAULTS.set_outputs(outputs);
}

/// The logger behind the free logging functions
pub fn default_logger() -> Arc<dyn Log> {
    Arc::clone(&DEFAULT_LOGGER.read())
}

/// Install a different logger implementation behind the free functions.
pub fn set_default_logger(logger: Arc<dyn Log>) {
    *DEFAULT_LOGGER.write() = logger;
}

pub fn print(level: LogLevel, message: &str, attrs: &[Attr]) {
    default_logger().print(level, message, attrs);
}

pub fn printf(level: LogLevel, args: fmt::Arguments<'_>) {
    default_logger().printf(level, args);
}

pub fn fatal(message: &str, attrs: &[Attr]) {
    default_logger().fatal(message, attrs);
}

pub fn error(message: &str, err: &dyn fmt::Display, attrs: &[Attr]) {
    default_logger().error(message, err, attrs);
}

pub fn warning(message: &str, attrs: &[Attr]) {
    default_logger().warning(message, attrs);
}

pub fn info(message: &str, attrs: &[Attr]) {
    default_logger().info(message, attrs);
}

pub fn debug(message: &str, attrs: &[Attr]) {
    default_logger().debug(message, attrs);
}

pub fn trace(message: &str, attrs: &[Attr]) {
    default_logger().trace(message, attrs);
}

pub fn fatalf(args: fmt::Arguments<'_>) {
    default_logger().fatalf(args);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

pub fn warningf(args: fmt::Arguments<'_>) {
    default_logger().warningf(args);
}

pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

pub fn tracef(args: fmt::Arguments<'_>) {
    default_logger().tracef(args);
}
