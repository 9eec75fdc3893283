//! Python toolchain detection and install-method resolution.
//!
//! This is where the real decision structure of the tool lives: locate an
//! interpreter, locate the package managers, determine whether the host
//! Python refuses unmanaged global installs (PEP 668), and pick the install
//! strategy. Every probe here is side-effect free — nothing is installed to
//! answer a question.
//!
//! # Modules
//!
//! - [`interpreter`] - Python interpreter detection
//! - [`managers`] - pip and pipx detection
//! - [`managed`] - externally-managed environment (PEP 668) check
//! - [`installed`] - per-manager "already installed" queries
//! - [`resolver`] - install/update method resolution policy

pub mod installed;
pub mod interpreter;
pub mod managed;
pub mod managers;
pub mod resolver;

pub use installed::{installed_via_pip, installed_via_pipx};
pub use interpreter::detect_python;
pub use managed::is_externally_managed;
pub use managers::{detect_pip, detect_pipx};
pub use resolver::{resolve_install_method, resolve_update_method, InstallMethod};

use serde::Serialize;

use crate::shell::CommandRunner;

/// Resolved view of the host Python environment.
///
/// Constructed once per invocation by probing the host; never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentState {
    /// Interpreter invocation name, if one with a compatible version exists.
    pub python: Option<String>,
    /// pip invocation name, if available.
    pub pip: Option<String>,
    /// pipx invocation name, if available.
    pub pipx: Option<String>,
    /// Whether the host Python refuses unmanaged global installs (PEP 668).
    pub externally_managed: bool,
}

impl EnvironmentState {
    /// Probe the full environment in one pass.
    ///
    /// The flows probe stepwise so they can fail fast on a missing
    /// interpreter; this is for diagnostics (`doctor`), where every field is
    /// reported regardless.
    pub fn probe(runner: &dyn CommandRunner) -> Self {
        let python = detect_python(runner);
        let externally_managed = python
            .as_deref()
            .is_some_and(|py| is_externally_managed(runner, py));

        Self {
            python,
            pip: detect_pip(runner),
            pipx: detect_pipx(runner),
            externally_managed,
        }
    }
}
