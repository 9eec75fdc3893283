//! Install-method resolution policy.
//!
//! The precedence order encodes operator safety: on an externally managed
//! host the tool prefers isolation (pipx), then a user-scoped pip install,
//! and never forces a system-protected install on its own.
//! `--break-system-packages` only ever appears as suggested manual text.

use std::fmt;

use serde::Serialize;

use super::EnvironmentState;
use crate::error::{BootstrapError, Result};
use crate::PACKAGE_NAME;

/// How the package will be installed or upgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallMethod {
    /// Isolated per-application install via pipx.
    Pipx,
    /// pip with the `--user` flag (per-user site-packages).
    PipUser,
    /// Plain pip install.
    Pip,
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipx => write!(f, "pipx"),
            Self::PipUser => write!(f, "pip --user"),
            Self::Pip => write!(f, "pip"),
        }
    }
}

impl InstallMethod {
    /// Program and arguments for the install command.
    ///
    /// `pip` is the detected pip invocation name; ignored for pipx.
    pub fn install_command(self, pip: &str) -> (String, Vec<String>) {
        match self {
            Self::Pipx => command("pipx", &["install", PACKAGE_NAME]),
            Self::PipUser => command(pip, &["install", "--user", PACKAGE_NAME]),
            Self::Pip => command(pip, &["install", PACKAGE_NAME]),
        }
    }

    /// Program and arguments for the upgrade command.
    pub fn upgrade_command(self, pip: &str) -> (String, Vec<String>) {
        match self {
            Self::Pipx => command("pipx", &["upgrade", PACKAGE_NAME]),
            Self::PipUser => command(pip, &["install", "--upgrade", "--user", PACKAGE_NAME]),
            Self::Pip => command(pip, &["install", "--upgrade", PACKAGE_NAME]),
        }
    }
}

fn command(program: &str, args: &[&str]) -> (String, Vec<String>) {
    (
        program.to_string(),
        args.iter().map(|a| (*a).to_string()).collect(),
    )
}

/// Pick the install method for the detected environment.
///
/// First match wins:
/// 1. externally managed + pipx available -> pipx
/// 2. externally managed + pip available -> pip with `--user`
/// 3. not externally managed + pip available -> plain pip
///
/// Anything else is [`BootstrapError::NoUsablePackageManager`].
pub fn resolve_install_method(state: &EnvironmentState) -> Result<InstallMethod> {
    if state.externally_managed {
        if state.pipx.is_some() {
            return Ok(InstallMethod::Pipx);
        }
        if state.pip.is_some() {
            return Ok(InstallMethod::PipUser);
        }
        return Err(BootstrapError::NoUsablePackageManager);
    }

    if state.pip.is_some() {
        Ok(InstallMethod::Pip)
    } else {
        Err(BootstrapError::NoUsablePackageManager)
    }
}

/// Pick the upgrade method for the detected environment.
///
/// A pipx registration wins outright; otherwise pip is required and the
/// managed flag selects between user-scoped and plain upgrade.
pub fn resolve_update_method(
    state: &EnvironmentState,
    registered_with_pipx: bool,
) -> Result<InstallMethod> {
    if state.pipx.is_some() && registered_with_pipx {
        return Ok(InstallMethod::Pipx);
    }

    if state.pip.is_none() {
        return Err(BootstrapError::NoUsablePackageManager);
    }

    if state.externally_managed {
        Ok(InstallMethod::PipUser)
    } else {
        Ok(InstallMethod::Pip)
    }
}
