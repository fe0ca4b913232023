//! Context-driven colored logging facade.
//!
//! A [`SeveroLog`] wraps a colored, leveled [`Backend`] and switches it
//! between three [`Context`]s:
//!
//! | Context     | Labels | Metadata            | Minimum level |
//! |-------------|--------|---------------------|---------------|
//! | `Default`   | no     | date and time       | `msg`         |
//! | `Verbose`   | yes    | date and time       | `info`        |
//! | `Debugging` | yes    | time and file:line  | `debug`       |
//!
//! Messages pick their level with a leading header such as `debug:` or
//! `warning:`; messages without one are logged at `info`.
//!
//! ```
//! use severo_log::{ColorMode, Context, Options, SeveroLog, Sink};
//!
//! let (sink, buffer) = Sink::buffer();
//! let log = SeveroLog::builder()
//!     .sink(sink)
//!     .options(Options { color: ColorMode::Never, ..Options::default() })
//!     .context(Context::Debugging)
//!     .build();
//!
//! log.print(format_args!("value={}", 42));
//! assert!(buffer.contents().contains("value=42"));
//! ```
//!
//! The [`facade`] module holds a process-wide instance with free functions
//! and the [`log_print!`], [`log_panic!`] and [`log_fatal!`] macros.

pub mod backend;
pub mod context;
pub mod error;
pub mod facade;
pub mod flags;
pub mod handle;
pub mod level;
pub mod palette;
pub mod severo;
pub mod sink;

pub use backend::{Backend, ColorMode, Options};
pub use context::{CONTEXT_ENV_VAR, Context, ContextProfile};
pub use error::{Error, Result};
pub use facade::{context, fatal, install, logger, panic, print, set_log_context};
pub use flags::Flags;
pub use handle::Handle;
pub use level::Level;
pub use severo::{SeveroLog, SeveroLogBuilder};
pub use sink::{SharedBuffer, Sink};
