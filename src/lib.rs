//! Library root for the `fanlog` crate
//!
//! A multi-sink structured logger: one call fans a leveled, timestamped
//! record out to console, file, and HTTP sinks, each with its own severity
//! threshold and output format.

// Core error handling
pub mod errors;

// Record model: severity, formats, the record itself
pub mod format;
pub mod level;
pub mod record;

// Sink configuration
pub mod config;

// Collaborators: console highlighting, HTTP transport
pub mod highlight;
pub mod net;

// The dispatcher
pub mod logger;

pub use config::{ConsoleSinkConfig, FileSinkConfig, HttpSinkConfig, LoggerConfig};
pub use errors::{LogError, LogResult};
pub use format::{DateMode, HttpMethod, OutputFormat};
pub use highlight::{AnsiHighlighter, Highlighter, PlainHighlighter};
pub use level::{Color, Severity};
pub use logger::{Handler, Logger};
pub use net::{NetworkClient, ReqwestClient};
pub use record::LogRecord;
