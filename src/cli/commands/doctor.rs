//! The `doctor` command.
//!
//! Reports what the detector sees without acting on it: interpreter, package
//! managers, the PEP 668 flag, whether the package is already installed, and
//! the install method that would be chosen. Diagnostic only — always exits 0.

use serde::Serialize;

use super::dispatcher::{Command, CommandResult};
use crate::cli::args::DoctorArgs;
use crate::detection::{
    installed_via_pip, installed_via_pipx, resolve_install_method, EnvironmentState, InstallMethod,
};
use crate::shell::{CommandRunner, SystemRunner};
use crate::ui::UserInterface;
use crate::PACKAGE_NAME;

/// Snapshot of the detected environment, renderable as text or JSON.
#[derive(Debug, Serialize)]
pub struct DoctorReport {
    /// Interpreter invocation name, if found.
    pub python: Option<String>,
    /// pip invocation name, if found.
    pub pip: Option<String>,
    /// pipx invocation name, if found.
    pub pipx: Option<String>,
    /// Whether the environment is externally managed (PEP 668).
    pub externally_managed: bool,
    /// Whether the package is already registered with the resolved manager.
    pub package_installed: bool,
    /// Install method that `install` would use, if any is usable.
    pub install_method: Option<InstallMethod>,
}

impl DoctorReport {
    /// Probe the host and assemble the report.
    pub fn gather(runner: &dyn CommandRunner) -> Self {
        let state = EnvironmentState::probe(runner);
        let install_method = resolve_install_method(&state).ok();
        let package_installed = match install_method {
            Some(InstallMethod::Pipx) => installed_via_pipx(runner),
            Some(InstallMethod::PipUser) | Some(InstallMethod::Pip) => state
                .pip
                .as_deref()
                .is_some_and(|pip| installed_via_pip(runner, pip)),
            None => false,
        };

        Self {
            python: state.python,
            pip: state.pip,
            pipx: state.pipx,
            externally_managed: state.externally_managed,
            package_installed,
            install_method,
        }
    }

    fn render(&self, ui: &mut dyn UserInterface) {
        ui.message(&format!("Python:             {}", found_or_dash(&self.python)));
        ui.message(&format!("pip:                {}", found_or_dash(&self.pip)));
        ui.message(&format!("pipx:               {}", found_or_dash(&self.pipx)));
        ui.message(&format!(
            "Externally managed: {}",
            if self.externally_managed { "yes (PEP 668)" } else { "no" }
        ));
        ui.message(&format!(
            "{} installed: {}",
            PACKAGE_NAME,
            if self.package_installed { "yes" } else { "no" }
        ));
        match self.install_method {
            Some(method) => ui.message(&format!("Install method:     {}", method)),
            None => ui.warning("No usable install method on this host"),
        }
    }
}

fn found_or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("not found")
}

/// The doctor command implementation.
pub struct DoctorCommand {
    args: DoctorArgs,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(args: DoctorArgs) -> Self {
        Self { args }
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let report = DoctorReport::gather(&SystemRunner);

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| crate::BootstrapError::Other(e.into()))?;
            ui.message(&json);
        } else {
            report.render(ui);
        }

        Ok(CommandResult::success())
    }
}
