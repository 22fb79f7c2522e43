//! Logging macros for printf-style messages and attribute lists.
//!
//! The `*f!` macros take a logger (anything that derefs to a [`Log`]) followed
//! by `format!`-style arguments. The rendered string becomes the message and
//! no attributes are attached.
//!
//! # Examples
//!
//! ```
//! use module_logger::prelude::*;
//! use module_logger::{infof, sinks::MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder("worker")
//!     .output(Output::new(sink.clone(), TagFormatter::new()))
//!     .build();
//!
//! let jobs = 3;
//! infof!(logger, "picked up {} jobs", jobs);
//!
//! assert!(sink.contents().contains("msg=\"picked up 3 jobs\""));
//! ```
//!
//! [`Log`]: crate::core::Log

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use module_logger::prelude::*;
/// # let logger = Logger::builder("svc").output(Output::new(module_logger::sinks::MemorySink::new(), LineFormatter::new())).build();
/// use module_logger::logf;
/// logf!(logger, LogLevel::Info, "Simple message");
/// logf!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::core::Log as _;
        $logger.printf($level, format_args!($($arg)+))
    }};
}

/// Log a formatted fatal-level message. The process keeps running.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log a formatted error-level message.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a formatted warning-level message.
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a formatted trace-level message.
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Build an attribute array from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use module_logger::attrs;
///
/// let attrs = attrs!["user" => "alice", "retries" => 3, "ok" => true];
/// assert_eq!(attrs.len(), 3);
/// assert_eq!(attrs[1].key, "retries");
/// ```
#[macro_export]
macro_rules! attrs {
    () => {{
        let empty: [$crate::core::Attr; 0] = [];
        empty
    }};
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$($crate::core::Attr::new($key, $value)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Defaults, LineFormatter, LogLevel, Logger, Output};
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    fn capture(level: LogLevel) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let defaults = Arc::new(Defaults::with(
            level,
            vec![Output::new(sink.clone(), LineFormatter::new())],
        ));
        (Logger::with_defaults("macros", defaults), sink)
    }

    #[test]
    fn test_logf_macro() {
        let (logger, sink) = capture(LogLevel::Info);
        logf!(logger, LogLevel::Info, "Test message");
        logf!(logger, LogLevel::Info, "Formatted: {}", 42);

        let lines = sink.lines();
        assert!(lines[0].ends_with("[macros] Test message"));
        assert!(lines[1].ends_with("[macros] Formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = capture(LogLevel::Trace);
        fatalf!(logger, "f{}", 1);
        errorf!(logger, "e{}", 2);
        warningf!(logger, "w{}", 3);
        infof!(logger, "i{}", 4);
        debugf!(logger, "d{}", 5);
        tracef!(logger, "t{}", 6);

        let levels: Vec<String> = sink
            .lines()
            .iter()
            .map(|line| line.split_whitespace().nth(2).unwrap_or_default().to_string())
            .collect();
        assert_eq!(levels, ["FATAL", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"]);
    }

    #[test]
    fn test_macros_respect_threshold() {
        let (logger, sink) = capture(LogLevel::Warning);
        infof!(logger, "hidden {}", 1);
        debugf!(logger, "hidden {}", 2);
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn test_macro_through_shared_logger() {
        let (logger, sink) = capture(LogLevel::Info);
        let shared: Arc<dyn crate::core::Log> = Arc::new(logger);
        infof!(shared, "via {}", "arc");
        assert!(sink.contents().contains("via arc"));
    }

    #[test]
    fn test_attrs_macro() {
        let empty = attrs![];
        assert!(empty.is_empty());

        let attrs = attrs!["a" => 1, "b" => "two",];
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].key, "a");
    }
}
