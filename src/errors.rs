//! Structured error types for the fanlog dispatcher
//!
//! Every error is raised synchronously at the point of detection and
//! propagates to the caller of `log()` — nothing is caught or retried
//! internally, so a failing sink surfaces as a real operational problem.

use crate::format::{HttpMethod, OutputFormat};
use thiserror::Error;

/// Main error type for the logger
#[derive(Error, Debug)]
pub enum LogError {
    #[error("unrecognized date mode: {value}")]
    InvalidDateMode { value: String },

    #[error("unrecognized severity: {value}")]
    InvalidSeverity { value: String },

    #[error("unrecognized level or format: {value}")]
    InvalidLevelOrFormat { value: String },

    #[error("a GET request carries no body; JSON format requires the POST method")]
    UnsupportedCombination {
        method: HttpMethod,
        format: OutputFormat,
    },

    #[error("serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("file sink I/O failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("network delivery failed: {operation}")]
    Network {
        operation: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Type alias for Result with LogError
pub type LogResult<T> = Result<T, LogError>;

impl LogError {
    /// Create an invalid date mode error
    pub fn invalid_date_mode(value: impl Into<String>) -> Self {
        Self::InvalidDateMode {
            value: value.into(),
        }
    }

    /// Create an invalid severity error
    pub fn invalid_severity(value: impl Into<String>) -> Self {
        Self::InvalidSeverity {
            value: value.into(),
        }
    }

    /// Create an invalid level-or-format error
    pub fn invalid_level_or_format(value: impl Into<String>) -> Self {
        Self::InvalidLevelOrFormat {
            value: value.into(),
        }
    }

    /// Create an unsupported method/format combination error
    pub fn unsupported_combination(method: HttpMethod, format: OutputFormat) -> Self {
        Self::UnsupportedCombination { method, format }
    }

    /// Create a serialization error
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a network error
    pub fn network(operation: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            operation: operation.into(),
            source,
        }
    }
}

/// Convert from serde_json errors
impl From<serde_json::Error> for LogError {
    fn from(err: serde_json::Error) -> Self {
        LogError::serialization("json_rendering", err)
    }
}

/// Convert from std::io errors
impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::io("file_append", err)
    }
}

/// Convert from reqwest errors
impl From<reqwest::Error> for LogError {
    fn from(err: reqwest::Error) -> Self {
        LogError::network("http_request", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let sev_err = LogError::invalid_severity("verbose");
        assert!(sev_err.to_string().contains("unrecognized severity"));

        let combo_err =
            LogError::unsupported_combination(HttpMethod::Get, OutputFormat::Json);
        assert!(combo_err.to_string().contains("GET request carries no body"));
    }

    #[test]
    fn test_error_chaining() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only fs");
        let log_err = LogError::io("appending record", io_err);

        assert!(log_err.source().is_some());
        assert!(log_err.to_string().contains("file sink I/O failed"));
    }
}
