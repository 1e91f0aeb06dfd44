//! The canonical log record and its per-format renderings
//!
//! A record is built once per `log()` call and shared by every sink during
//! that call. All renderings — the text line, the JSON object, and the GET
//! query string — derive from the same (date, type, message) tuple.

use crate::errors::LogResult;
use crate::format::DateMode;
use crate::level::Severity;
use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::Serialize;

/// Timestamp pattern: `DD.MM.YYYY HH:MM:SS.micros`.
const TIMESTAMP_PATTERN: &str = "%d.%m.%Y %H:%M:%S%.6f";

/// Immutable value produced once per log call.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Capture time, carrying the offset the configured date mode produced.
    pub timestamp: DateTime<FixedOffset>,
    pub severity: Severity,
    pub message: String,
}

/// JSON shape of the structured record. A field-ordered struct keeps the
/// emitted key order fixed at date, type, message.
#[derive(Serialize)]
struct RecordJson<'a> {
    date: String,
    #[serde(rename = "type")]
    kind: &'a str,
    message: &'a str,
}

impl LogRecord {
    /// Build a record for `severity` and `message`, timestamped now
    /// according to `date_mode`.
    pub fn capture(date_mode: DateMode, severity: Severity, message: impl Into<String>) -> Self {
        let timestamp = match date_mode {
            DateMode::Local => Local::now().fixed_offset(),
            DateMode::Utc => Utc::now().fixed_offset(),
        };
        Self {
            timestamp,
            severity,
            message: message.into(),
        }
    }

    /// The fixed-pattern timestamp string shared by all renderings.
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_PATTERN).to_string()
    }

    /// Text rendering: `LEVEL: [timestamp]: message`.
    pub fn render_text(&self) -> String {
        format!(
            "{}: [{}]: {}",
            self.severity.name_upper(),
            self.timestamp_string(),
            self.message
        )
    }

    /// JSON rendering: `{"date": ..., "type": ..., "message": ...}`.
    pub fn render_json(&self) -> LogResult<String> {
        let object = RecordJson {
            date: self.timestamp_string(),
            kind: self.severity.name(),
            message: &self.message,
        };
        Ok(serde_json::to_string(&object)?)
    }

    /// Query-string rendering for bodyless GET delivery. Field order is
    /// fixed (date, type, message); values are the raw display forms with
    /// no percent-encoding.
    pub fn query_string(&self) -> String {
        format!(
            "?date={}&type={}&message={}",
            self.timestamp_string(),
            self.severity.name(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(severity: Severity, message: &str) -> LogRecord {
        LogRecord::capture(DateMode::Utc, severity, message)
    }

    #[test]
    fn test_timestamp_pattern() {
        let record = sample(Severity::Info, "hi");
        let ts = record.timestamp_string();
        // DD.MM.YYYY HH:MM:SS.micros
        assert_eq!(ts.len(), "01.01.2026 00:00:00.000000".len());
        assert_eq!(&ts[2..3], ".");
        assert_eq!(&ts[5..6], ".");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[19..20], ".");
    }

    #[test]
    fn test_text_rendering() {
        let record = sample(Severity::Warn, "boot ok");
        let line = record.render_text();
        assert!(line.starts_with("WARN: ["));
        assert!(line.ends_with("]: boot ok"));
    }

    #[test]
    fn test_json_rendering_round_trips() {
        let record = sample(Severity::Info, "hi");
        let json = record.render_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["date"], record.timestamp_string());
        assert_eq!(parsed["type"], "info");
        assert_eq!(parsed["message"], "hi");
    }

    #[test]
    fn test_json_key_order() {
        let record = sample(Severity::Error, "x");
        let json = record.render_json().unwrap();
        let date_at = json.find("\"date\"").unwrap();
        let type_at = json.find("\"type\"").unwrap();
        let message_at = json.find("\"message\"").unwrap();
        assert!(date_at < type_at && type_at < message_at);
    }

    #[test]
    fn test_query_string_field_order() {
        let record = sample(Severity::Debug, "ping");
        let query = record.query_string();
        assert!(query.starts_with("?date="));
        assert!(query.contains("&type=debug&message=ping"));
    }
}
