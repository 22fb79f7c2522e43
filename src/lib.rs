//! # Module Logger
//!
//! A leveled, structured logging facade: named per-module loggers filter
//! records by severity and hand them to one or more outputs, each pairing a
//! sink with a formatter.
//!
//! ## Features
//!
//! - **Six severities**: `FATAL`, `ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`
//! - **Three encodings**: plain lines, `key="value"` tags and JSON
//! - **Fan-out**: every output is attempted, failures never reach the caller
//! - **Shared defaults**: unset thresholds and outputs follow a defaults
//!   context, the process-wide one or one you inject
//!
//! ## Example
//!
//! ```
//! use module_logger::prelude::*;
//! use module_logger::sinks::MemorySink;
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let defaults = Arc::new(Defaults::with(
//!     LogLevel::Info,
//!     vec![Output::new(sink.clone(), LineFormatter::new())],
//! ));
//!
//! let logger = Logger::with_defaults("svc", defaults);
//! logger.info("started", &attrs!["port" => 8080]);
//! logger.debug("not shown", &[]);
//!
//! assert!(sink.contents().ends_with("INFO  [svc] started: port=8080\n"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::attrs;
    pub use crate::core::{
        Attr, Defaults, Formatter, JsonFormatter, LineFormatter, Log, LogLevel, Logger,
        LoggerBuilder, LoggerError, Output, Record, Result, Sink, TagFormatter, Value,
    };
    pub use crate::sinks::{StderrSink, StdoutSink, WriterSink};
}

pub use crate::core::defaults::{
    debug, debugf, default_level, default_logger, default_outputs, error, errorf, fatal, fatalf,
    info, infof, print, printf, set_default_level, set_default_logger, set_default_outputs, trace,
    tracef, warning, warningf,
};
pub use crate::core::{
    attrs_from_flat, formatter_fn, global_defaults, render, Attr, Defaults, Formatter,
    JsonFormatter, LineFormatter, Log, LogLevel, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Output, Record, Result, Sink, TagFormatter, Value,
};
