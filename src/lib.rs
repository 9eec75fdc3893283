//! Bootstrap installer for the SuperClaude Python package.
//!
//! This crate detects a local Python toolchain (interpreter, `pip`, `pipx`),
//! decides which package manager can be used on this host, installs or
//! upgrades SuperClaude through it, and then hands off to the package's own
//! CLI to perform its real setup work.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Python toolchain detection and install-method resolution
//! - [`error`] - Error types and result aliases
//! - [`flows`] - The installer and updater flows
//! - [`shell`] - Child process execution
//! - [`ui`] - Terminal output and theming
//!
//! # Example
//!
//! ```
//! use superclaude_bootstrap::detection::{
//!     resolve_install_method, EnvironmentState, InstallMethod,
//! };
//!
//! let state = EnvironmentState {
//!     python: Some("python3".to_string()),
//!     pip: Some("pip3".to_string()),
//!     pipx: Some("pipx".to_string()),
//!     externally_managed: true,
//! };
//! assert_eq!(resolve_install_method(&state).unwrap(), InstallMethod::Pipx);
//! ```

pub mod cli;
pub mod detection;
pub mod error;
pub mod flows;
pub mod shell;
pub mod ui;

pub use error::{BootstrapError, Result};

/// Name of the companion package on PyPI.
pub const PACKAGE_NAME: &str = "SuperClaude";

/// Executable exposed by the companion package once installed.
pub const PACKAGE_BIN: &str = "SuperClaude";
