//! Error types for the aelist application.
//!
//! Errors are `thiserror` enums composed into [`AppError`] through `From`
//! conversions, so startup code can propagate with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the startup path
//!   - [`ConfigError`] - Bad flags, config file or directory list
//!   - [`IndexError`] - Nothing launchable was found
//!   - [`LoggingError`] - Log file could not be set up
//!   - [`TuiError`] - Terminal I/O failures
//!   - `ctrlc::Error` - Interrupt handler could not be installed
//!
//! # Recovery Strategy
//!
//! Only startup errors reach the user. An unreadable directory or an entry that
//! cannot be stat'ed is absorbed by the index scan. A failed launch is
//! [`LaunchError`], which is logged and never shown: the process exits with
//! status 0 either way.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// Every variant is fatal and is reported on stderr after the terminal has
/// been restored.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid configuration: too many directories, bad numeric option,
    /// unreadable config file.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The index scan found no executables.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The tracing subscriber could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, rendering or input failed.
    #[error(transparent)]
    Terminal(#[from] TuiError),

    /// The SIGINT/SIGTERM handler could not be installed.
    #[error("Failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Errors raised while building the candidate index.
///
/// Per-directory and per-entry failures never appear here; they only shrink
/// the index. The build fails only when the result would be empty.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// None of the scanned directories contained an executable file.
    ///
    /// # Examples
    ///
    /// ```
    /// use aelist::model::error::IndexError;
    ///
    /// let err = IndexError::NoExecutablesFound { directories: 3 };
    /// assert!(err.to_string().contains("3 directories"));
    /// ```
    #[error("No executable files found in {directories} directories")]
    NoExecutablesFound {
        /// How many directories were configured for the scan.
        directories: usize,
    },
}

/// Errors from the detached launch.
///
/// Never surfaced to the user: the launcher logs these at `warn` and still
/// exits with status 0.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Confirm was pressed while the query matched nothing.
    #[error("Nothing selected to launch")]
    NoSelection,

    /// `fork`/`exec` of the selected path failed (missing file since the
    /// scan, resource exhaustion, exec format error).
    #[error("Failed to launch {path:?}: {source}")]
    Spawn {
        /// Path that was being executed.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },
}
