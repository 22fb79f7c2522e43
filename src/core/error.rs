//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Flat attribute list with an unpaired trailing key
    #[error("Attribute list has odd length {len}: every key needs a value")]
    OddAttributes { len: usize },

    /// Attribute key that is not text
    #[error("Attribute key at position {index} is not text (found {found})")]
    NonTextKey { index: usize, found: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

}

impl LoggerError {
    pub fn odd_attributes(len: usize) -> Self {
        LoggerError::OddAttributes { len }
    }

    pub fn non_text_key(index: usize, found: impl Into<String>) -> Self {
        LoggerError::NonTextKey {
            index,
            found: found.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

}
