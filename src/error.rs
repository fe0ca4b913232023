//! Error types for the logging facade.

use thiserror::Error;

/// Errors raised at the configuration boundary of the logger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown log context '{name}'. Expected: default, verbose, debugging.")]
    UnknownContext { name: String },
    #[error("Log context value {value} is out of range (expected 0..=2)")]
    ContextOutOfRange { value: u8 },
    #[error("Failed to install logger: the process-wide logger is already initialized")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, Error>;
