//! Console highlighting collaborator
//!
//! The logger never emits escape codes itself; it hands the rendered line
//! and a color name to a `Highlighter`. The ANSI implementation is the
//! default; the pass-through one suits non-terminal stdout.

use crate::level::Color;

/// Maps (text, color) to a display string for console delivery.
pub trait Highlighter: Send + Sync {
    fn paint(&self, text: &str, color: Color) -> String;
}

/// Wraps the text in standard ANSI color escape sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiHighlighter;

impl AnsiHighlighter {
    fn code(color: Color) -> &'static str {
        match color {
            Color::Cyan => "\x1b[36m",
            Color::Grey => "\x1b[90m",
            Color::Magenta => "\x1b[35m",
            Color::Yellow => "\x1b[33m",
            Color::Red => "\x1b[31m",
        }
    }

    fn reset() -> &'static str {
        "\x1b[0m"
    }
}

impl Highlighter for AnsiHighlighter {
    fn paint(&self, text: &str, color: Color) -> String {
        format!("{}{}{}", Self::code(color), text, Self::reset())
    }
}

/// No-op pass-through for pipes and log capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn paint(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }
}
