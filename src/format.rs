//! Per-sink output format, process-wide date mode, and HTTP delivery method

use crate::errors::LogError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Serialized shape of a rendering: a plain text line or a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(LogError::invalid_level_or_format(other)),
        }
    }
}

/// Whether record timestamps are captured as local wall-clock or UTC.
/// Applies uniformly to every record the logger produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    #[default]
    Local,
    Utc,
}

impl FromStr for DateMode {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(DateMode::Local),
            "utc" => Ok(DateMode::Utc),
            other => Err(LogError::invalid_date_mode(other)),
        }
    }
}

/// Delivery method for the HTTP sink. GET requests carry no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl FromStr for HttpMethod {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            other => Err(LogError::invalid_level_or_format(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(DateMode::default(), DateMode::Local);
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }

    #[test]
    fn test_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("utc".parse::<DateMode>().unwrap(), DateMode::Utc);
        assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(LogError::InvalidLevelOrFormat { .. })
        ));
        assert!(matches!(
            "zulu".parse::<DateMode>(),
            Err(LogError::InvalidDateMode { .. })
        ));
        assert!(matches!(
            "PUT".parse::<HttpMethod>(),
            Err(LogError::InvalidLevelOrFormat { .. })
        ));
    }
}
