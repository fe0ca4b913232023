//! Severity levels and message header parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered severity of a log line.
///
/// `Message` sits between `Info` and `Warning` and is the "plain" level: it
/// is emitted without a severity label even when headers are shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Message,
    Warning,
    Error,
    Alert,
}

/// Header prefixes recognized at the start of a message, longest first so
/// `warning:` wins over `warn:`.
const HEADERS: &[(&str, Level)] = &[
    ("warning:", Level::Warning),
    ("trace:", Level::Trace),
    ("debug:", Level::Debug),
    ("error:", Level::Error),
    ("alert:", Level::Alert),
    ("info:", Level::Info),
    ("warn:", Level::Warning),
    ("msg:", Level::Message),
];

impl Level {
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Message,
        Level::Warning,
        Level::Error,
        Level::Alert,
    ];

    /// Fixed-width label printed in front of the line, or `None` for `Message`.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Level::Trace => Some("[ trace ]"),
            Level::Debug => Some("[ debug ]"),
            Level::Info => Some("[  info ]"),
            Level::Message => None,
            Level::Warning => Some("[  warn ]"),
            Level::Error => Some("[ error ]"),
            Level::Alert => Some("[ alert ]"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Message => "msg",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Alert => "alert",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Splits a leading level header off `message`.
///
/// Returns the level named by the header (if any) and the remaining text with
/// the header and the whitespace after it removed.
pub fn parse_header(message: &str) -> (Option<Level>, &str) {
    for (header, level) in HEADERS {
        if let Some(rest) = message.strip_prefix(header) {
            return (Some(*level), rest.trim_start_matches(' '));
        }
    }
    (None, message)
}
