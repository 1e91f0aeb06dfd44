//! Sink configuration owned by the logger
//!
//! Each sink kind has its own config struct. A file or HTTP sink is enabled
//! iff its config is present; console is enabled unless explicitly disabled.
//! Configuration is fixed at construction and immutable afterwards.

use crate::format::{DateMode, HttpMethod, OutputFormat};
use crate::level::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_true() -> bool {
    true
}

fn default_console_level() -> Severity {
    Severity::Trace
}

fn default_sink_level() -> Severity {
    Severity::Info
}

/// Console sink: text rendering only, colored by the highlighter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleSinkConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_console_level")]
    pub min_level: Severity,
}

impl Default for ConsoleSinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_level: Severity::Trace,
        }
    }
}

/// File sink: append-create per call, optional one-shot truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSinkConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub truncate_on_start: bool,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_sink_level")]
    pub min_level: Severity,
}

impl FileSinkConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            truncate_on_start: false,
            format: OutputFormat::Text,
            min_level: Severity::Info,
        }
    }

    pub fn with_truncate_on_start(mut self, truncate: bool) -> Self {
        self.truncate_on_start = truncate;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }
}

/// HTTP sink: GET appends the record as query parameters, POST sends the
/// chosen rendering as the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSinkConfig {
    pub address: String,
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_sink_level")]
    pub min_level: Severity,
}

impl HttpSinkConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            method: HttpMethod::Get,
            format: OutputFormat::Text,
            min_level: Severity::Info,
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }
}

/// Full logger configuration. `Default` yields a console-only logger with
/// local timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub console: ConsoleSinkConfig,
    #[serde(default)]
    pub date_mode: DateMode,
    #[serde(default)]
    pub file: Option<FileSinkConfig>,
    #[serde(default)]
    pub http: Option<HttpSinkConfig>,
}

impl LoggerConfig {
    pub fn with_console_enabled(mut self, enabled: bool) -> Self {
        self.console.enabled = enabled;
        self
    }

    pub fn with_console_min_level(mut self, level: Severity) -> Self {
        self.console.min_level = level;
        self
    }

    pub fn with_date_mode(mut self, mode: DateMode) -> Self {
        self.date_mode = mode;
        self
    }

    pub fn with_file(mut self, file: FileSinkConfig) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_http(mut self, http: HttpSinkConfig) -> Self {
        self.http = Some(http);
        self
    }
}
