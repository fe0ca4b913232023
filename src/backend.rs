//! Configurable colored, leveled backend.
//!
//! The backend owns the mutable options and the output sink. It never writes
//! by itself: callers ask it for a [`Handle`], an immutable snapshot of the
//! options at that moment, and write through the handle.

use crate::flags::Flags;
use crate::handle::Handle;
use crate::level::Level;
use crate::sink::Sink;

/// When ANSI colors are applied to rendered lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Always color, even when the stream is not a terminal.
    #[default]
    Always,
    /// Let `colored` decide from the terminal and `NO_COLOR`/`CLICOLOR*`.
    /// Other loggers' modes never change this decision.
    Auto,
    /// Never color.
    Never,
}

/// Backend options. Context switches overwrite `omit_headers`, `flags`,
/// `min_level` and `default_level`; the rest is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Text written in front of every message, after the label.
    pub prefix: String,
    pub flags: Flags,
    /// Lines below this level are dropped.
    pub min_level: Level,
    /// Level of messages that carry no level header.
    pub default_level: Level,
    /// Hide the `[ level ]` label.
    pub omit_headers: bool,
    pub color: ColorMode,
    /// Highlight `key=value` tokens.
    pub parse_fields: bool,
    /// Move parsed fields to the end of the line.
    pub adjust_fields_right: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            flags: Flags::STD,
            min_level: Level::Trace,
            default_level: Level::Info,
            omit_headers: false,
            color: ColorMode::Always,
            parse_fields: true,
            adjust_fields_right: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Backend {
    options: Options,
    sink: Sink,
}

impl Backend {
    pub fn new(sink: Sink, options: Options) -> Self {
        Self { options, sink }
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.options.flags = flags;
    }

    pub fn set_min_level(&mut self, level: Level) {
        self.options.min_level = level;
    }

    pub fn set_default_level(&mut self, level: Level) {
        self.options.default_level = level;
    }

    pub fn set_omit_headers(&mut self, omit: bool) {
        self.options.omit_headers = omit;
    }

    /// Builds a derived handle from the current options.
    pub fn new_handle(&self) -> Handle {
        Handle::new(self.options.clone(), self.sink.clone())
    }
}
