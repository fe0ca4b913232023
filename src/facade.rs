//! Process-wide logger and the free functions that delegate to it.
//!
//! The shared [`SeveroLog`] is created on first use with the `Default`
//! context and colored stdout output. A startup routine that wants other
//! settings builds its own logger and hands it to [`install`] before anything
//! logs.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::handle::Handle;
use crate::severo::SeveroLog;

static LOGGER: OnceLock<SeveroLog> = OnceLock::new();

/// Installs `logger` as the process-wide logger.
///
/// Fails if the shared logger was already installed or lazily created.
pub fn install(logger: SeveroLog) -> Result<()> {
    LOGGER.set(logger).map_err(|_| Error::AlreadyInstalled)
}

/// Returns the process-wide logger, creating it if needed.
pub fn instance() -> &'static SeveroLog {
    LOGGER.get_or_init(SeveroLog::new)
}

/// Formats and prints a line through the shared logger.
#[track_caller]
pub fn print(args: fmt::Arguments<'_>) {
    instance().print(args);
}

/// Prints a line, then panics with the same message.
#[track_caller]
pub fn panic(args: fmt::Arguments<'_>) -> ! {
    instance().panic(args)
}

/// Prints a line, then exits the process with status 1.
#[track_caller]
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    instance().fatal(args)
}

pub fn set_log_context(context: Context) {
    instance().set_context(context);
}

pub fn context() -> Context {
    instance().context()
}

/// Current derived handle of the shared logger.
pub fn logger() -> Arc<Handle> {
    instance().logger()
}

/// Prints through the process-wide logger using `format!` syntax.
#[macro_export]
macro_rules! log_print {
    ($($arg:tt)*) => {
        $crate::facade::print(::std::format_args!($($arg)*))
    };
}

/// Prints through the process-wide logger, then panics with the message.
#[macro_export]
macro_rules! log_panic {
    ($($arg:tt)*) => {
        $crate::facade::panic(::std::format_args!($($arg)*))
    };
}

/// Prints through the process-wide logger, then exits with status 1.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        $crate::facade::fatal(::std::format_args!($($arg)*))
    };
}
