//! The multi-sink dispatcher
//!
//! One `log()` call builds a single [`LogRecord`] and fans it out to every
//! enabled sink whose threshold the record meets, in a fixed order:
//! console, then HTTP, then file, then the optional handler callback.
//!
//! Failure isolation is "stop on first sink error": an error inside one
//! sink's delivery propagates to the caller and skips the sinks that have
//! not yet run, while sinks dispatched earlier stay dispatched. Nothing is
//! caught, retried, or suppressed internally.
//!
//! `log()` is synchronous and blocking. The logger is `Send + Sync`, but
//! concurrent callers must serialize file appends themselves if they need
//! records to never interleave mid-line; that is a caller obligation, not
//! an internal guarantee.

use crate::config::{FileSinkConfig, HttpSinkConfig, LoggerConfig};
use crate::errors::{LogError, LogResult};
use crate::format::{DateMode, HttpMethod, OutputFormat};
use crate::highlight::{AnsiHighlighter, Highlighter};
use crate::level::Severity;
use crate::net::{NetworkClient, ReqwestClient};
use crate::record::LogRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Optional callback invoked with the structured record on every call.
pub type Handler = Box<dyn Fn(&LogRecord) + Send + Sync>;

/// File sink plus its one piece of mutable cross-call state: the
/// "already truncated this run" flag, set once the first delivered write
/// has cleared the pre-existing file and never reset.
struct FileSink {
    config: FileSinkConfig,
    truncated: AtomicBool,
}

/// HTTP sink. The default blocking client is built lazily on the first
/// delivery, so callers that inject their own client never construct it.
struct HttpSink {
    config: HttpSinkConfig,
    client: OnceLock<Box<dyn NetworkClient>>,
}

impl HttpSink {
    fn client(&self) -> &dyn NetworkClient {
        self.client
            .get_or_init(|| Box::new(ReqwestClient::new()))
            .as_ref()
    }
}

pub struct Logger {
    console_enabled: bool,
    console_min_level: Severity,
    date_mode: DateMode,
    file: Option<FileSink>,
    http: Option<HttpSink>,
    highlighter: Box<dyn Highlighter>,
    handler: Option<Handler>,
}

impl Logger {
    /// Build a logger from `config`.
    ///
    /// Rejects an HTTP sink configured as GET with JSON format up front;
    /// the same combination also fails at call time, since delivery
    /// re-checks it. When an HTTP sink is present and no client has been
    /// injected, a default blocking reqwest client is created on the
    /// first delivery.
    pub fn new(config: LoggerConfig) -> LogResult<Self> {
        if let Some(http) = &config.http {
            validate_http_combination(http)?;
        }
        let http = config.http.map(|config| HttpSink {
            client: OnceLock::new(),
            config,
        });
        let file = config.file.map(|config| FileSink {
            config,
            truncated: AtomicBool::new(false),
        });
        Ok(Self {
            console_enabled: config.console.enabled,
            console_min_level: config.console.min_level,
            date_mode: config.date_mode,
            file,
            http,
            highlighter: Box::new(AnsiHighlighter),
            handler: None,
        })
    }

    /// Replace the HTTP sink's network client. Ignored when no HTTP sink
    /// is configured.
    pub fn with_network_client(mut self, client: Box<dyn NetworkClient>) -> Self {
        if let Some(http) = &mut self.http {
            http.client = OnceLock::from(client);
        }
        self
    }

    /// Replace the console highlighter.
    pub fn with_highlighter(mut self, highlighter: Box<dyn Highlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Install the handler callback. At most one; a later call replaces
    /// the earlier handler.
    pub fn with_handler(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Fan one record out to every enabled sink that accepts `severity`.
    ///
    /// Thresholds are inclusive: a record exactly at a sink's minimum
    /// level is delivered. Sinks run in the order console, HTTP, file,
    /// handler.
    pub fn log(&self, severity: Severity, message: impl Into<String>) -> LogResult<()> {
        let record = LogRecord::capture(self.date_mode, severity, message);

        if self.console_enabled && record.severity >= self.console_min_level {
            let line = self
                .highlighter
                .paint(&record.render_text(), record.severity.color());
            println!("{line}");
        }

        if let Some(sink) = &self.http {
            if record.severity >= sink.config.min_level {
                deliver_http(sink, &record)?;
            }
        }

        if let Some(sink) = &self.file {
            if record.severity >= sink.config.min_level {
                deliver_file(sink, &record)?;
            }
        }

        if let Some(handler) = &self.handler {
            handler(&record);
        }

        Ok(())
    }

    pub fn debug(&self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Debug, message)
    }

    pub fn trace(&self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Trace, message)
    }

    pub fn info(&self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Info, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Warn, message)
    }

    pub fn error(&self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Error, message)
    }

    pub fn fatal(&self, message: impl Into<String>) -> LogResult<()> {
        self.log(Severity::Fatal, message)
    }
}

fn validate_http_combination(config: &HttpSinkConfig) -> LogResult<()> {
    if config.method == HttpMethod::Get && config.format == OutputFormat::Json {
        return Err(LogError::unsupported_combination(
            config.method,
            config.format,
        ));
    }
    Ok(())
}

fn deliver_http(sink: &HttpSink, record: &LogRecord) -> LogResult<()> {
    // The GET+JSON check runs here as well as at construction: delivery
    // must fail before any network activity even if a config slipped past.
    match (sink.config.method, sink.config.format) {
        (HttpMethod::Get, OutputFormat::Json) => Err(LogError::unsupported_combination(
            sink.config.method,
            sink.config.format,
        )),
        (HttpMethod::Get, OutputFormat::Text) => {
            let url = format!("{}{}", sink.config.address, record.query_string());
            sink.client().get(&url)
        }
        (HttpMethod::Post, OutputFormat::Json) => {
            sink.client().post(&sink.config.address, record.render_json()?)
        }
        (HttpMethod::Post, OutputFormat::Text) => {
            sink.client().post(&sink.config.address, record.render_text())
        }
    }
}

fn deliver_file(sink: &FileSink, record: &LogRecord) -> LogResult<()> {
    // The flag is set only after the removal succeeds, so a failed delete
    // leaves truncation pending for the next delivered write.
    if sink.config.truncate_on_start && !sink.truncated.load(Ordering::SeqCst) {
        match std::fs::remove_file(&sink.config.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(LogError::io("truncating log file", e)),
        }
        sink.truncated.store(true, Ordering::SeqCst);
    }

    let rendering = match sink.config.format {
        OutputFormat::Text => record.render_text(),
        OutputFormat::Json => record.render_json()?,
    };

    // Open-append-close per call; no handle is held across calls, so
    // external rotation of the file stays safe.
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&sink.config.path)
        .map_err(|e| LogError::io("opening log file", e))?;
    file.write_all(rendering.as_bytes())
        .map_err(|e| LogError::io("appending record", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_json_rejected_at_construction() {
        let config = LoggerConfig::default().with_http(
            HttpSinkConfig::new("http://localhost:9880/logs")
                .with_method(HttpMethod::Get)
                .with_format(OutputFormat::Json),
        );
        assert!(matches!(
            Logger::new(config),
            Err(LogError::UnsupportedCombination { .. })
        ));
    }

    #[test]
    fn test_console_only_construction() {
        let logger = Logger::new(LoggerConfig::default()).unwrap();
        assert!(logger.http.is_none());
        assert!(logger.file.is_none());
        assert!(logger.handler.is_none());
    }

    struct NullClient;

    impl NetworkClient for NullClient {
        fn get(&self, _url: &str) -> LogResult<()> {
            Ok(())
        }

        fn post(&self, _url: &str, _body: String) -> LogResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_client_is_not_built_eagerly() {
        let config = LoggerConfig::default()
            .with_http(HttpSinkConfig::new("http://localhost:9880/logs"));
        let logger = Logger::new(config).unwrap();
        assert!(logger.http.as_ref().unwrap().client.get().is_none());
    }

    #[test]
    fn test_injected_client_fills_the_slot() {
        let config = LoggerConfig::default()
            .with_http(HttpSinkConfig::new("http://localhost:9880/logs"));
        let logger = Logger::new(config)
            .unwrap()
            .with_network_client(Box::new(NullClient));
        assert!(logger.http.as_ref().unwrap().client.get().is_some());
    }
}
