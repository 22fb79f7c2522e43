//! Core logger types and traits

pub mod defaults;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output;
pub mod record;
pub mod sink;
pub mod value;

pub use defaults::{global_defaults, Defaults, MAIN_MODULE};
pub use error::{LoggerError, Result};
pub use formatter::{
    formatter_fn, render, FnFormatter, Formatter, JsonFormatter, LineFormatter, TagFormatter,
    TIME_FORMAT,
};
pub use log_level::LogLevel;
pub use logger::{Log, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output::{Output, OutputFailure};
pub use record::Record;
pub use sink::Sink;
pub use value::{attrs_from_flat, Attr, Value};
