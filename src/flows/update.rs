//! Updater flow.
//!
//! Mirror of the installer with upgrade semantics. There is no "only if
//! outdated" check — the upgrade command always runs and the package manager
//! decides whether anything changes.

use crate::detection::{
    detect_pip, detect_pipx, detect_python, installed_via_pipx, is_externally_managed,
    resolve_update_method, EnvironmentState, InstallMethod,
};
use crate::error::{BootstrapError, Result};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;
use crate::{PACKAGE_BIN, PACKAGE_NAME};

/// Run the updater flow.
pub fn run_update(runner: &dyn CommandRunner, ui: &mut dyn UserInterface) -> Result<()> {
    ui.message(&format!("Checking for {} updates...", PACKAGE_NAME));

    let Some(python) = detect_python(runner) else {
        ui.error("Python 3 is required but was not found.");
        ui.hint("Install Python 3.8 or newer from https://python.org");
        return Err(BootstrapError::InterpreterNotFound);
    };

    let externally_managed = is_externally_managed(runner, &python);
    let state = EnvironmentState {
        python: Some(python),
        pip: detect_pip(runner),
        pipx: detect_pipx(runner),
        externally_managed,
    };

    let registered_with_pipx = state.pipx.is_some() && installed_via_pipx(runner);
    let method = match resolve_update_method(&state, registered_with_pipx) {
        Ok(method) => method,
        Err(e) => {
            ui.error("Neither pipx nor pip was found; cannot update.");
            ui.hint(&format!("Install {} first:", PACKAGE_NAME));
            ui.hint(&format!("pipx install {}", PACKAGE_NAME));
            ui.hint("or");
            ui.hint(&format!("pip install {}", PACKAGE_NAME));
            return Err(e);
        }
    };

    match method {
        InstallMethod::Pipx => ui.success("Detected a pipx installation"),
        InstallMethod::PipUser => ui.success("Detected a pip installation (user scope)"),
        InstallMethod::Pip => ui.success("Detected a standard pip installation"),
    }

    upgrade_package(runner, &state, method, ui)?;
    invoke_package_cli(runner, ui);
    Ok(())
}

/// Run the resolved upgrade command, streaming its output.
fn upgrade_package(
    runner: &dyn CommandRunner,
    state: &EnvironmentState,
    method: InstallMethod,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    ui.message(&format!("Updating {} from PyPI...", PACKAGE_NAME));

    let pip = state.pip.as_deref().unwrap_or("pip");
    let (program, args) = method.upgrade_command(pip);
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let outcome = runner.stream(&program, &arg_refs);

    if !outcome.success() {
        ui.error("Update failed.");
        match method {
            InstallMethod::Pipx => {
                ui.hint(&format!("Try running it manually: pipx upgrade {}", PACKAGE_NAME));
            }
            InstallMethod::PipUser => {
                ui.hint(&format!("Try: pipx upgrade {}", PACKAGE_NAME));
                ui.hint(&format!("Or:  pip install --upgrade --user {}", PACKAGE_NAME));
            }
            InstallMethod::Pip => {
                ui.hint("Check pip's output above for details");
            }
        }
        return Err(BootstrapError::UpgradeCommandFailed {
            command: format!("{} {}", program, args.join(" ")),
            code: outcome.exit_code(),
        });
    }

    ui.success(&format!("{} updated successfully!", PACKAGE_NAME));
    Ok(())
}

/// Invoke the package's own update command. Best-effort, like the installer's
/// hand-off.
fn invoke_package_cli(runner: &dyn CommandRunner, ui: &mut dyn UserInterface) {
    ui.message(&format!("Running {} update...", PACKAGE_BIN));

    if runner.stream(PACKAGE_BIN, &["update"]).success() {
        return;
    }

    ui.warning(&format!(
        "Could not run '{} update' automatically.",
        PACKAGE_BIN
    ));
    ui.hint("Run it yourself:");
    ui.hint(&format!("{} update", PACKAGE_BIN));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::StubRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const SYSCONFIG_PROBE: &str =
        "python3 -c import sysconfig; print(sysconfig.get_path('stdlib'))";

    fn with_python(stdlib: &TempDir) -> StubRunner {
        StubRunner::new()
            .succeeds("python3 --version", "Python 3.11.2")
            .succeeds(SYSCONFIG_PROBE, &format!("{}\n", stdlib.path().display()))
    }

    fn mark_externally_managed(stdlib: &TempDir) {
        fs::write(stdlib.path().join("EXTERNALLY-MANAGED"), "[managed]\n").unwrap();
    }

    #[test]
    fn missing_interpreter_is_fatal() {
        let runner = StubRunner::new();
        let mut ui = MockUI::new();

        let result = run_update(&runner, &mut ui);

        assert!(matches!(result, Err(BootstrapError::InterpreterNotFound)));
    }

    #[test]
    fn pipx_registration_upgrades_via_pipx() {
        let stdlib = TempDir::new().unwrap();
        let runner = with_python(&stdlib)
            .succeeds("pipx --version", "1.5.0")
            .succeeds("pipx list --short", "superclaude 4.0.8\n")
            .succeeds("pipx upgrade SuperClaude", "")
            .succeeds("SuperClaude update", "");
        let mut ui = MockUI::new();

        run_update(&runner, &mut ui).unwrap();

        assert!(runner.was_called("pipx upgrade SuperClaude"));
        assert!(runner.was_called("SuperClaude update"));
    }

    #[test]
    fn unregistered_pipx_falls_back_to_pip() {
        let stdlib = TempDir::new().unwrap();
        let runner = with_python(&stdlib)
            .succeeds("pipx --version", "1.5.0")
            .succeeds("pipx list --short", "black 24.4.2\n")
            .succeeds("pip3 --version", "pip 24.0")
            .succeeds("pip3 install --upgrade SuperClaude", "")
            .succeeds("SuperClaude update", "");
        let mut ui = MockUI::new();

        run_update(&runner, &mut ui).unwrap();

        assert!(runner.was_called("pip3 install --upgrade SuperClaude"));
        assert!(!runner.was_called("pipx upgrade SuperClaude"));
    }

    #[test]
    fn managed_host_upgrades_with_user_scope() {
        let stdlib = TempDir::new().unwrap();
        mark_externally_managed(&stdlib);
        let runner = with_python(&stdlib)
            .succeeds("pip3 --version", "pip 24.0")
            .succeeds("pip3 install --upgrade --user SuperClaude", "")
            .succeeds("SuperClaude update", "");
        let mut ui = MockUI::new();

        run_update(&runner, &mut ui).unwrap();

        assert!(runner.was_called("pip3 install --upgrade --user SuperClaude"));
        assert!(ui.contains("user scope"));
    }

    #[test]
    fn no_managers_is_fatal_with_install_first_hint() {
        let stdlib = TempDir::new().unwrap();
        let runner = with_python(&stdlib);
        let mut ui = MockUI::new();

        let result = run_update(&runner, &mut ui);

        assert!(matches!(
            result,
            Err(BootstrapError::NoUsablePackageManager)
        ));
        assert!(ui.contains("Install SuperClaude first"));
    }

    #[test]
    fn upgrade_failure_is_fatal() {
        let stdlib = TempDir::new().unwrap();
        let runner = with_python(&stdlib)
            .succeeds("pipx --version", "1.5.0")
            .succeeds("pipx list --short", "superclaude 4.0.8\n")
            .fails("pipx upgrade SuperClaude", 1);
        let mut ui = MockUI::new();

        let result = run_update(&runner, &mut ui);

        assert!(matches!(
            result,
            Err(BootstrapError::UpgradeCommandFailed { code: Some(1), .. })
        ));
        assert!(!runner.was_called("SuperClaude update"));
    }

    #[test]
    fn package_cli_failure_is_not_fatal() {
        let stdlib = TempDir::new().unwrap();
        let runner = with_python(&stdlib)
            .succeeds("pipx --version", "1.5.0")
            .succeeds("pipx list --short", "superclaude 4.0.8\n")
            .succeeds("pipx upgrade SuperClaude", "")
            .fails("SuperClaude update", 1);
        let mut ui = MockUI::new();

        let result = run_update(&runner, &mut ui);

        assert!(result.is_ok());
        assert!(ui.contains("Could not run 'SuperClaude update' automatically"));
    }
}
