//! Test utilities for severo-log integration tests.

#![allow(dead_code)]

use regex::Regex;
use severo_log::{ColorMode, Context, Options, SeveroLog, SharedBuffer, Sink};

/// Build an uncolored logger writing into a buffer.
pub fn captured(context: Context) -> (SeveroLog, SharedBuffer) {
    let (sink, buffer) = Sink::buffer();
    let log = SeveroLog::builder()
        .sink(sink)
        .options(Options {
            color: ColorMode::Never,
            ..Options::default()
        })
        .context(context)
        .build();
    (log, buffer)
}

/// Replace every digit so lines written at different instants compare equal.
pub fn mask_digits(text: &str) -> String {
    Regex::new(r"\d")
        .expect("valid regex")
        .replace_all(text, "0")
        .into_owned()
}

/// Assert that `line` matches the anchored pattern `pattern`.
pub fn assert_line(line: &str, pattern: &str) {
    let re = Regex::new(&format!("^{pattern}$")).expect("valid regex");
    assert!(re.is_match(line), "line {line:?} does not match {pattern:?}");
}

pub const DATE: &str = r"\d{4}/\d{2}/\d{2}";
pub const TIME: &str = r"\d{2}:\d{2}:\d{2}";
