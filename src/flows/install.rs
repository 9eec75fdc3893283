//! Installer flow.
//!
//! ProbeInterpreter -> ProbeManagers -> ResolveMethod -> CheckInstalled ->
//! (Install if absent) -> InvokePackageCLI -> Done.
//!
//! The final hand-off to the package's own `install` command is best-effort:
//! the package may have installed fine even when its CLI needs a fresh shell
//! to appear on PATH, so that step warns instead of failing the run.

use crate::detection::{
    detect_pip, detect_pipx, detect_python, installed_via_pip, installed_via_pipx,
    is_externally_managed, resolve_install_method, EnvironmentState, InstallMethod,
};
use crate::error::{BootstrapError, Result};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;
use crate::{PACKAGE_BIN, PACKAGE_NAME};

/// Run the installer flow.
pub fn run_install(runner: &dyn CommandRunner, ui: &mut dyn UserInterface) -> Result<()> {
    ui.message("Checking environment...");

    let Some(python) = detect_python(runner) else {
        ui.error("Python 3 is required but was not found.");
        ui.hint("Install Python 3.8 or newer from https://python.org");
        return Err(BootstrapError::InterpreterNotFound);
    };
    ui.success(&format!("Found Python: {}", python));

    let externally_managed = is_externally_managed(runner, &python);
    if externally_managed {
        ui.message("Detected an externally managed Python environment (PEP 668)");
    }

    let state = EnvironmentState {
        python: Some(python),
        pip: detect_pip(runner),
        pipx: detect_pipx(runner),
        externally_managed,
    };

    let method = match resolve_install_method(&state) {
        Ok(method) => method,
        Err(e) => {
            report_no_manager(&state, ui);
            return Err(e);
        }
    };
    announce_method(&state, method, ui);

    if already_installed(runner, &state, method) {
        ui.success(&format!("{} is already installed.", PACKAGE_NAME));
    } else {
        install_package(runner, &state, method, ui)?;
    }

    invoke_package_cli(runner, method, ui);
    Ok(())
}

/// Explain why no install method could be resolved.
fn report_no_manager(state: &EnvironmentState, ui: &mut dyn UserInterface) {
    if state.externally_managed {
        ui.error("Neither pipx nor pip was found. Install one of them.");
        ui.hint("pipx: apt install pipx (Ubuntu/Debian) or brew install pipx (macOS)");
    } else {
        ui.error("pip is required but was not found.");
        ui.hint("Install pip, or use your system package manager");
    }
}

/// Report the chosen method, with the safety warning for the pip --user
/// fallback on externally managed hosts.
fn announce_method(state: &EnvironmentState, method: InstallMethod, ui: &mut dyn UserInterface) {
    match method {
        InstallMethod::Pipx => {
            if let Some(pipx) = state.pipx.as_deref() {
                ui.success(&format!("Found pipx: {}", pipx));
            }
        }
        InstallMethod::PipUser => {
            ui.warning("pipx is recommended on this system but was not found.");
            ui.hint("Install it with: apt install pipx (Ubuntu/Debian) or brew install pipx (macOS)");
            ui.hint("Or install manually with one of:");
            ui.hint(&format!("pip install --user {}  # recommended", PACKAGE_NAME));
            ui.hint(&format!(
                "pip install --break-system-packages {}  # forced (use with care)",
                PACKAGE_NAME
            ));
            if let Some(pip) = state.pip.as_deref() {
                ui.success(&format!("Found pip: {}", pip));
            }
            ui.message("Will install with the --user flag");
        }
        InstallMethod::Pip => {
            if let Some(pip) = state.pip.as_deref() {
                ui.success(&format!("Found pip: {}", pip));
            }
        }
    }
}

/// Query the resolved method's manager for an existing installation.
fn already_installed(
    runner: &dyn CommandRunner,
    state: &EnvironmentState,
    method: InstallMethod,
) -> bool {
    match method {
        InstallMethod::Pipx => installed_via_pipx(runner),
        InstallMethod::PipUser | InstallMethod::Pip => state
            .pip
            .as_deref()
            .is_some_and(|pip| installed_via_pip(runner, pip)),
    }
}

/// Run the resolved install command, streaming its output.
fn install_package(
    runner: &dyn CommandRunner,
    state: &EnvironmentState,
    method: InstallMethod,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    ui.message(&format!("Installing {} from PyPI...", PACKAGE_NAME));

    let pip = state.pip.as_deref().unwrap_or("pip");
    let (program, args) = method.install_command(pip);
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let outcome = runner.stream(&program, &arg_refs);

    if !outcome.success() {
        ui.error("Installation failed.");
        match method {
            InstallMethod::Pipx => {
                ui.hint(&format!("Try running it manually: pipx install {}", PACKAGE_NAME));
            }
            InstallMethod::PipUser => {
                ui.hint(&format!("Try: pipx install {}", PACKAGE_NAME));
                ui.hint(&format!("Or:  pip install --user {}", PACKAGE_NAME));
            }
            InstallMethod::Pip => {
                ui.hint("Check pip's output above for details");
            }
        }
        return Err(BootstrapError::InstallCommandFailed {
            command: format!("{} {}", program, args.join(" ")),
            code: outcome.exit_code(),
        });
    }

    ui.success(&format!("{} installed successfully!", PACKAGE_NAME));
    if method == InstallMethod::Pipx {
        ui.message(&format!(
            "Note: if the '{}' command is not found, run:",
            PACKAGE_BIN
        ));
        ui.hint("pipx ensurepath");
        ui.hint("then restart your terminal or run: source ~/.bashrc");
    }
    Ok(())
}

/// Invoke the package's own install command. Best-effort: a failure here
/// warns and leaves the overall run successful.
fn invoke_package_cli(
    runner: &dyn CommandRunner,
    method: InstallMethod,
    ui: &mut dyn UserInterface,
) {
    ui.message(&format!("Running {} install...", PACKAGE_BIN));

    if runner.stream(PACKAGE_BIN, &["install"]).success() {
        return;
    }

    ui.warning(&format!(
        "Could not run '{} install' automatically.",
        PACKAGE_BIN
    ));
    ui.hint(&format!(
        "Make sure {} is on your PATH, then run it yourself:",
        PACKAGE_BIN
    ));
    ui.hint(&format!("{} install", PACKAGE_BIN));
    match method {
        InstallMethod::Pipx => {
            ui.hint("If the command is not found, try: pipx ensurepath && source ~/.bashrc");
        }
        InstallMethod::PipUser => {
            ui.hint("If the command is not found, add Python's user bin to PATH:");
            ui.hint("export PATH=\"$HOME/.local/bin:$PATH\"");
        }
        InstallMethod::Pip => {}
    }
}
