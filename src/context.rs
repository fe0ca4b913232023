//! Verbosity contexts and the fixed configuration each one selects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flags::Flags;
use crate::level::Level;

/// Environment variable read by [`Context::from_env`].
pub const CONTEXT_ENV_VAR: &str = "SEVERO_LOG_CONTEXT";

/// Named verbosity mode for the whole program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Plain output: only `msg:` lines and warnings or worse, no headers.
    #[default]
    Default,
    /// Informational lines with level headers, logged as stages complete.
    Verbose,
    /// Everything down to debug, with the caller's source location.
    Debugging,
}

/// Backend settings a context maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextProfile {
    pub omit_headers: bool,
    pub flags: Flags,
    pub min_level: Level,
}

impl Context {
    pub const ALL: [Context; 3] = [Context::Default, Context::Verbose, Context::Debugging];

    pub fn profile(self) -> ContextProfile {
        match self {
            Context::Default => ContextProfile {
                omit_headers: true,
                flags: Flags::DATE | Flags::TIME,
                min_level: Level::Message,
            },
            Context::Verbose => ContextProfile {
                omit_headers: false,
                flags: Flags::DATE | Flags::TIME,
                min_level: Level::Info,
            },
            Context::Debugging => ContextProfile {
                omit_headers: false,
                flags: Flags::TIME | Flags::LONG_FILE,
                min_level: Level::Debug,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Context::Default => "default",
            Context::Verbose => "verbose",
            Context::Debugging => "debugging",
        }
    }

    /// Reads the context from `SEVERO_LOG_CONTEXT`.
    ///
    /// Returns `Ok(None)` when the variable is unset or blank.
    pub fn from_env() -> Result<Option<Context>> {
        parse_optional(std::env::var(CONTEXT_ENV_VAR).ok().as_deref())
    }
}

fn parse_optional(value: Option<&str>) -> Result<Option<Context>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some),
    }
}

impl FromStr for Context {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "d" => Ok(Context::Default),
            "verbose" | "v" => Ok(Context::Verbose),
            "debugging" | "debug" => Ok(Context::Debugging),
            _ => Err(Error::UnknownContext {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for Context {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Context::Default),
            1 => Ok(Context::Verbose),
            2 => Ok(Context::Debugging),
            _ => Err(Error::ContextOutOfRange { value }),
        }
    }
}

impl From<Context> for u8 {
    fn from(context: Context) -> u8 {
        match context {
            Context::Default => 0,
            Context::Verbose => 1,
            Context::Debugging => 2,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
