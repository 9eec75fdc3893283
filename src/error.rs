//! Error types for bootstrap operations.
//!
//! This module defines [`BootstrapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The first four variants are fatal: the run terminates with exit code 1
//!   after printing remediation text
//! - A failing post-install package CLI is deliberately NOT an error — it is
//!   recovered locally as a warning and the run still succeeds
//! - Use `anyhow::Error` (via `BootstrapError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No Python 3 interpreter could be found on the host.
    #[error("no Python 3 interpreter found")]
    InterpreterNotFound,

    /// Neither pipx nor pip is usable for the resolved environment.
    #[error("no usable Python package manager found")]
    NoUsablePackageManager,

    /// The package manager's install command ran and failed.
    #[error("install command failed with exit code {code:?}: {command}")]
    InstallCommandFailed { command: String, code: Option<i32> },

    /// The package manager's upgrade command ran and failed.
    #[error("upgrade command failed with exit code {code:?}: {command}")]
    UpgradeCommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
