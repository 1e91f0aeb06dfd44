//! Severity levels and their canonical names and highlight colors

use crate::errors::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity classifies the loudness of a log record.
///
/// The derived `Ord` supplies the total order used for sink thresholds:
/// `Debug < Trace < Info < Warn < Error < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Debug,
    Trace,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Canonical lowercase name, used as the `type` field of the
    /// structured record.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Trace => "trace",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }

    /// Uppercase name used in the text rendering.
    pub fn name_upper(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Highlight color for console output.
    pub fn color(&self) -> Color {
        match self {
            Severity::Debug => Color::Cyan,
            Severity::Trace => Color::Grey,
            Severity::Info => Color::Magenta,
            Severity::Warn => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Fatal => Color::Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            other => Err(LogError::invalid_severity(other)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LogError;

    fn try_from(value: u8) -> Result<Self, LogError> {
        match value {
            0 => Ok(Severity::Debug),
            1 => Ok(Severity::Trace),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Warn),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Fatal),
            other => Err(LogError::invalid_severity(other.to_string())),
        }
    }
}

/// Highlight color names recognized by [`Highlighter`](crate::highlight::Highlighter)
/// implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Grey,
    Magenta,
    Yellow,
    Red,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_total_order() {
        assert!(Severity::Debug < Severity::Trace);
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Warn.name(), "warn");
        assert_eq!(Severity::Warn.name_upper(), "WARN");
        assert_eq!(Severity::Fatal.to_string(), "fatal");
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Debug.color(), Color::Cyan);
        assert_eq!(Severity::Trace.color(), Color::Grey);
        assert_eq!(Severity::Info.color(), Color::Magenta);
        assert_eq!(Severity::Warn.color(), Color::Yellow);
        assert_eq!(Severity::Error.color(), Color::Red);
        assert_eq!(Severity::Fatal.color(), Color::Red);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("trace".parse::<Severity>().unwrap(), Severity::Trace);
        assert!(matches!(
            "verbose".parse::<Severity>(),
            Err(LogError::InvalidSeverity { .. })
        ));
    }

    #[test]
    fn test_severity_from_u8() {
        assert_eq!(Severity::try_from(0).unwrap(), Severity::Debug);
        assert_eq!(Severity::try_from(5).unwrap(), Severity::Fatal);
        assert!(matches!(
            Severity::try_from(6),
            Err(LogError::InvalidSeverity { .. })
        ));
    }
}
