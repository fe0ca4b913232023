//! Line metadata flags: which timestamp and source-location parts to print.

use std::ops::{BitOr, BitOrAssign};
use std::panic::Location;
use std::path::Path;

use chrono::{DateTime, Local, Utc};

/// Bit set selecting the metadata written in front of each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Local date, `2009/01/23`.
    pub const DATE: Flags = Flags(1);
    /// Local time, `01:23:23`.
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution, `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line, `src/net/conn.rs:23`.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// File name and line, `conn.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC instead of the local time zone.
    pub const UTC: Flags = Flags(1 << 5);
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    #[must_use]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub(crate) fn wants_time(self) -> bool {
        self.contains(Self::TIME) || self.contains(Self::MICROSECONDS)
    }

    pub(crate) fn wants_location(self) -> bool {
        self.contains(Self::LONG_FILE) || self.contains(Self::SHORT_FILE)
    }

    /// Renders the timestamp part (`date time `) for `now`, honoring `UTC`.
    pub(crate) fn render_timestamp(self, now: DateTime<Utc>, out: &mut String) {
        if !self.contains(Self::DATE) && !self.wants_time() {
            return;
        }
        if self.contains(Self::UTC) {
            self.push_timestamp(&now, out);
        } else {
            self.push_timestamp(&now.with_timezone(&Local), out);
        }
    }

    fn push_timestamp<Tz>(self, at: &DateTime<Tz>, out: &mut String)
    where
        Tz: chrono::TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        if self.contains(Self::DATE) {
            out.push_str(&at.format("%Y/%m/%d ").to_string());
        }
        if self.contains(Self::MICROSECONDS) {
            out.push_str(&at.format("%H:%M:%S%.6f ").to_string());
        } else if self.contains(Self::TIME) {
            out.push_str(&at.format("%H:%M:%S ").to_string());
        }
    }

    /// Renders `file:line: ` for the caller location.
    pub(crate) fn render_location(self, location: &Location<'_>, out: &mut String) {
        if !self.wants_location() {
            return;
        }
        let file = location.file();
        let file = if self.contains(Self::SHORT_FILE) {
            Path::new(file)
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(file)
        } else {
            file
        };
        out.push_str(file);
        out.push(':');
        out.push_str(&location.line().to_string());
        out.push_str(": ");
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}
