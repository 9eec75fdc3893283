//! End-to-end flow tests over the public API, with scripted commands.

use std::fs;

use superclaude_bootstrap::detection::{resolve_install_method, EnvironmentState, InstallMethod};
use superclaude_bootstrap::flows::{run_install, run_update};
use superclaude_bootstrap::shell::StubRunner;
use superclaude_bootstrap::ui::MockUI;
use superclaude_bootstrap::BootstrapError;
use tempfile::TempDir;

const SYSCONFIG_PROBE: &str = "python3 -c import sysconfig; print(sysconfig.get_path('stdlib'))";

fn host_with_python(stdlib: &TempDir) -> StubRunner {
    StubRunner::new()
        .succeeds("python3 --version", "Python 3.11.2")
        .succeeds(SYSCONFIG_PROBE, &format!("{}\n", stdlib.path().display()))
}

fn mark_externally_managed(stdlib: &TempDir) {
    fs::write(stdlib.path().join("EXTERNALLY-MANAGED"), "[managed]\n").unwrap();
}

#[test]
fn installer_is_idempotent_across_runs() {
    let stdlib = TempDir::new().unwrap();
    mark_externally_managed(&stdlib);

    // First run: package absent, install happens.
    let first = host_with_python(&stdlib)
        .succeeds("pipx --version", "1.5.0")
        .succeeds("pipx list --short", "")
        .succeeds("pipx install SuperClaude", "")
        .succeeds("SuperClaude install", "");
    let mut ui = MockUI::new();
    run_install(&first, &mut ui).unwrap();
    assert!(first.was_called("pipx install SuperClaude"));

    // Second run: the manager now reports the package; no install command.
    let second = host_with_python(&stdlib)
        .succeeds("pipx --version", "1.5.0")
        .succeeds("pipx list --short", "superclaude 4.0.8\n")
        .succeeds("SuperClaude install", "");
    let mut ui = MockUI::new();
    run_install(&second, &mut ui).unwrap();
    assert!(!second.was_called("pipx install SuperClaude"));
    assert!(second.was_called("SuperClaude install"));
}

#[test]
fn installer_exits_before_manager_probes_without_interpreter() {
    let runner = StubRunner::new();
    let mut ui = MockUI::new();

    let result = run_install(&runner, &mut ui);

    assert!(matches!(result, Err(BootstrapError::InterpreterNotFound)));
    assert_eq!(runner.calls(), vec!["python3 --version", "python --version"]);
}

#[test]
fn managed_host_prefers_pipx_over_pip() {
    let stdlib = TempDir::new().unwrap();
    mark_externally_managed(&stdlib);
    let runner = host_with_python(&stdlib)
        .succeeds("pip3 --version", "pip 24.0")
        .succeeds("pipx --version", "1.5.0")
        .succeeds("pipx list --short", "")
        .succeeds("pipx install SuperClaude", "")
        .succeeds("SuperClaude install", "");
    let mut ui = MockUI::new();

    run_install(&runner, &mut ui).unwrap();

    assert!(runner.was_called("pipx install SuperClaude"));
    assert!(!runner.was_called("pip3 install --user SuperClaude"));
    assert!(!runner.was_called("pip3 install SuperClaude"));
}

#[test]
fn unmanaged_host_with_existing_install_goes_straight_to_package_cli() {
    let stdlib = TempDir::new().unwrap();
    let runner = host_with_python(&stdlib)
        .succeeds("pip3 --version", "pip 24.0")
        .succeeds("pip3 show SuperClaude", "Name: SuperClaude")
        .succeeds("SuperClaude install", "");
    let mut ui = MockUI::new();

    run_install(&runner, &mut ui).unwrap();

    assert!(!runner.was_called("pip3 install SuperClaude"));
    assert!(runner.was_called("SuperClaude install"));
}

#[test]
fn failed_package_cli_still_reports_success_with_guidance() {
    let stdlib = TempDir::new().unwrap();
    let runner = host_with_python(&stdlib)
        .succeeds("pip3 --version", "pip 24.0")
        .fails("pip3 show SuperClaude", 1)
        .succeeds("pip3 install SuperClaude", "")
        .fails("SuperClaude install", 3);
    let mut ui = MockUI::new();

    let result = run_install(&runner, &mut ui);

    assert!(result.is_ok());
    assert!(!ui.warnings().is_empty());
    assert!(ui.contains("SuperClaude install"));
}

#[test]
fn updater_upgrades_pipx_registration() {
    let stdlib = TempDir::new().unwrap();
    let runner = host_with_python(&stdlib)
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
fn resolution_precedence_matches_policy_table() {
    let make = |pip: Option<&str>, pipx: Option<&str>, managed: bool| EnvironmentState {
        python: Some("python3".to_string()),
        pip: pip.map(str::to_string),
        pipx: pipx.map(str::to_string),
        externally_managed: managed,
    };

    assert_eq!(
        resolve_install_method(&make(Some("pip3"), Some("pipx"), true)).unwrap(),
        InstallMethod::Pipx
    );
    assert_eq!(
        resolve_install_method(&make(Some("pip3"), None, true)).unwrap(),
        InstallMethod::PipUser
    );
    assert_eq!(
        resolve_install_method(&make(Some("pip3"), Some("pipx"), false)).unwrap(),
        InstallMethod::Pip
    );
    assert!(resolve_install_method(&make(None, None, true)).is_err());
    assert!(resolve_install_method(&make(None, Some("pipx"), false)).is_err());
}
