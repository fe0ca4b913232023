//! Derived logger handle: an immutable formatter bound to the shared sink.

use std::fmt;
use std::io;
use std::panic::Location;

use chrono::{DateTime, Utc};

use crate::backend::{ColorMode, Options};
use crate::level::{Level, parse_header};
use crate::palette;
use crate::sink::Sink;

/// Concrete logger used for writes.
///
/// A handle never changes after it is built. Reconfiguring the backend means
/// building a new handle; handles obtained earlier keep their old settings.
#[derive(Debug, Clone)]
pub struct Handle {
    options: Options,
    sink: Sink,
}

impl Handle {
    pub(crate) fn new(options: Options, sink: Sink) -> Self {
        Self { options, sink }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether a message at `level` passes this handle's filter.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.options.min_level
    }

    /// Formats and writes one line, reporting I/O failures.
    ///
    /// Returns `Ok(false)` when the line was dropped by the level filter.
    #[track_caller]
    pub fn write(&self, args: fmt::Arguments<'_>) -> io::Result<bool> {
        self.emit(Location::caller(), &args.to_string(), false)
    }

    /// Formats and writes one line; write errors are ignored.
    #[track_caller]
    pub fn print(&self, args: fmt::Arguments<'_>) {
        let _ = self.emit(Location::caller(), &args.to_string(), false);
    }

    /// Writes the line regardless of level, then panics with the message.
    #[track_caller]
    pub fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        let _ = self.emit(Location::caller(), &message, true);
        std::panic::panic_any(message)
    }

    /// Writes the line regardless of level, flushes and exits with status 1.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.emit(Location::caller(), &args.to_string(), true);
        let _ = self.sink.flush();
        std::process::exit(1)
    }

    fn emit(&self, location: &Location<'_>, text: &str, force: bool) -> io::Result<bool> {
        let (header, body) = parse_header(text);
        let level = header.unwrap_or(self.options.default_level);
        if !force && !self.enabled(level) {
            return Ok(false);
        }
        let line = self.render(level, location, body, Utc::now());
        self.sink.write_line(&line)?;
        Ok(true)
    }

    /// Renders a complete line, trailing newline included.
    pub(crate) fn render(
        &self,
        level: Level,
        location: &Location<'_>,
        body: &str,
        now: DateTime<Utc>,
    ) -> String {
        let options = &self.options;
        let mut line = String::with_capacity(body.len() + 48);

        if !options.omit_headers {
            if let Some(label) = level.label() {
                line.push_str(&self.paint_label(label, level));
                line.push(' ');
            }
        }
        line.push_str(&options.prefix);

        let mut timestamp = String::new();
        options.flags.render_timestamp(now, &mut timestamp);
        line.push_str(&self.paint(&timestamp, palette::TIMESTAMP_RGB));

        let mut file = String::new();
        options.flags.render_location(location, &mut file);
        line.push_str(&self.paint(&file, palette::LOCATION_RGB));

        self.push_body(body.trim_end_matches('\n'), &mut line);
        line.push('\n');
        line
    }

    fn push_body(&self, body: &str, line: &mut String) {
        if !self.options.parse_fields {
            line.push_str(body);
            return;
        }

        let mut words = Vec::new();
        let mut fields = Vec::new();
        for token in body.split(' ') {
            match split_field(token) {
                Some((key, value)) => {
                    let rendered = format!("{}={value}", self.paint(key, palette::FIELD_KEY_RGB));
                    if self.options.adjust_fields_right {
                        fields.push(rendered);
                    } else {
                        words.push(rendered);
                    }
                }
                None => words.push(token.to_string()),
            }
        }

        line.push_str(&words.join(" "));
        if !fields.is_empty() {
            if !line.ends_with(' ') && !words.iter().all(String::is_empty) {
                line.push(' ');
            }
            line.push_str(&fields.join(" "));
        }
    }

    fn paint(&self, text: &str, rgb: (u8, u8, u8)) -> String {
        self.colorize(text, rgb, false)
    }

    fn paint_label(&self, label: &str, level: Level) -> String {
        self.colorize(label, palette::level_rgb(level), palette::label_is_bold(level))
    }

    fn colorize(&self, text: &str, rgb: (u8, u8, u8), bold: bool) -> String {
        if text.is_empty() {
            return String::new();
        }
        match self.options.color {
            ColorMode::Never => text.to_string(),
            ColorMode::Always => palette::forced(text, rgb, bold),
            ColorMode::Auto => palette::paint(text, rgb, bold).to_string(),
        }
    }
}

/// Splits `key=value` when the key is a plain identifier.
fn split_field(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once('=')?;
    let valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    valid_key.then_some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::panic::AssertUnwindSafe;

    fn plain(options: Options) -> (Handle, crate::sink::SharedBuffer) {
        let (sink, buffer) = Sink::buffer();
        let options = Options {
            color: ColorMode::Never,
            ..options
        };
        (Handle::new(options, sink), buffer)
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
            .single()
            .expect("valid instant")
    }

    #[test]
    fn render_includes_label_and_utc_timestamp() {
        let (handle, _) = plain(Options {
            flags: Flags::STD | Flags::UTC,
            ..Options::default()
        });
        let line = handle.render(Level::Warning, Location::caller(), "disk low", instant());
        assert_eq!(line, "[  warn ] 2024/05/06 07:08:09 disk low\n");
    }

    #[test]
    fn message_level_never_has_a_label() {
        let (handle, _) = plain(Options {
            flags: Flags::NONE,
            ..Options::default()
        });
        let line = handle.render(Level::Message, Location::caller(), "hello", instant());
        assert_eq!(line, "hello\n");
    }

    #[test]
    fn omit_headers_hides_labels() {
        let (handle, _) = plain(Options {
            flags: Flags::NONE,
            omit_headers: true,
            prefix: "app: ".to_string(),
            ..Options::default()
        });
        let line = handle.render(Level::Error, Location::caller(), "boom", instant());
        assert_eq!(line, "app: boom\n");
    }

    #[test]
    fn trailing_newlines_collapse_to_one() {
        let (handle, _) = plain(Options {
            flags: Flags::NONE,
            omit_headers: true,
            ..Options::default()
        });
        let line = handle.render(Level::Info, Location::caller(), "done\n\n", instant());
        assert_eq!(line, "done\n");
    }

    #[test]
    fn fields_move_right_when_adjusted() {
        let (handle, _) = plain(Options {
            flags: Flags::NONE,
            omit_headers: true,
            adjust_fields_right: true,
            ..Options::default()
        });
        let line = handle.render(Level::Info, Location::caller(), "user=ann logged in", instant());
        assert_eq!(line, "logged in user=ann\n");
    }

    #[test]
    fn write_filters_below_min_level() {
        let (handle, buffer) = plain(Options {
            flags: Flags::NONE,
            min_level: Level::Warning,
            ..Options::default()
        });

        assert!(!handle.write(format_args!("debug: hidden")).unwrap());
        assert!(!handle.write(format_args!("no header")).unwrap());
        assert!(handle.write(format_args!("error: shown {}", 1)).unwrap());

        assert_eq!(buffer.contents(), "[ error ] shown 1\n");
    }

    #[test]
    fn write_records_caller_location() {
        let (handle, buffer) = plain(Options {
            flags: Flags::SHORT_FILE,
            omit_headers: true,
            ..Options::default()
        });
        handle.print(format_args!("here"));
        let output = buffer.contents();
        assert!(output.starts_with("handle.rs:"), "got {output:?}");
        assert!(output.ends_with(": here\n"));
    }

    #[test]
    fn panic_writes_before_unwinding() {
        let (handle, buffer) = plain(Options {
            flags: Flags::NONE,
            min_level: Level::Alert,
            omit_headers: true,
            ..Options::default()
        });
        let result: std::thread::Result<()> = std::panic::catch_unwind(AssertUnwindSafe(|| {
            handle.panic(format_args!("bad {}", "state"))
        }));

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("bad state"));
        assert_eq!(buffer.contents(), "bad state\n");
    }

    #[test]
    fn always_colors_without_a_terminal() {
        let (sink, _) = Sink::buffer();
        let handle = Handle::new(
            Options {
                flags: Flags::NONE,
                color: ColorMode::Always,
                ..Options::default()
            },
            sink,
        );
        let line = handle.render(Level::Error, Location::caller(), "n=1", instant());
        assert_eq!(
            line,
            "\x1b[1;38;2;242;63;93m[ error ]\x1b[0m \x1b[38;2;255;99;58mn\x1b[0m=1\n"
        );
    }

    #[test]
    fn split_field_requires_identifier_key() {
        assert_eq!(split_field("a=1"), Some(("a", "1")));
        assert_eq!(split_field("path.len=3"), Some(("path.len", "3")));
        assert_eq!(split_field("=1"), None);
        assert_eq!(split_field("a b=1"), None);
        assert_eq!(split_field("plain"), None);
    }
}
