//! Externally-managed environment (PEP 668) check.
//!
//! Distributions that own their Python installation (Debian, Fedora, Homebrew)
//! drop an `EXTERNALLY-MANAGED` marker file into the interpreter's stdlib
//! directory; pip refuses unguarded global installs when it is present. The
//! check here only inspects that marker — it never attempts an install to
//! observe the policy.

use std::path::{Path, PathBuf};

use crate::shell::{CommandRunner, RunOutcome};

/// Name of the PEP 668 marker file.
const MARKER_FILE: &str = "EXTERNALLY-MANAGED";

/// Whether the given interpreter's environment refuses unmanaged installs.
///
/// Any probe failure (interpreter won't run, unparseable output) is treated
/// as "not externally managed" — the install step will surface the real
/// error if the policy turns out to apply.
pub fn is_externally_managed(runner: &dyn CommandRunner, python: &str) -> bool {
    match stdlib_path(runner, python) {
        Some(stdlib) => marker_present(&stdlib),
        None => false,
    }
}

/// Ask the interpreter for its stdlib directory via `sysconfig`.
fn stdlib_path(runner: &dyn CommandRunner, python: &str) -> Option<PathBuf> {
    let script = "import sysconfig; print(sysconfig.get_path('stdlib'))";
    match runner.probe(python, &["-c", script]) {
        RunOutcome::Exited(out) if out.success => {
            let path = out.stdout.trim();
            if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            }
        }
        _ => None,
    }
}

/// Whether the marker file exists in the given stdlib directory.
pub fn marker_present(stdlib: &Path) -> bool {
    stdlib.join(MARKER_FILE).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::StubRunner;
    use std::fs;
    use tempfile::TempDir;

    const SYSCONFIG_PROBE: &str =
        "python3 -c import sysconfig; print(sysconfig.get_path('stdlib'))";

    #[test]
    fn detects_marker_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MARKER_FILE), "[externally-managed]\n").unwrap();

        let runner = StubRunner::new()
            .succeeds(SYSCONFIG_PROBE, &format!("{}\n", temp.path().display()));

        assert!(is_externally_managed(&runner, "python3"));
    }

    #[test]
    fn unmanaged_without_marker_file() {
        let temp = TempDir::new().unwrap();

        let runner = StubRunner::new()
            .succeeds(SYSCONFIG_PROBE, &format!("{}\n", temp.path().display()));

        assert!(!is_externally_managed(&runner, "python3"));
    }

    #[test]
    fn unmanaged_when_probe_fails() {
        let runner = StubRunner::new().fails(SYSCONFIG_PROBE, 1);
        assert!(!is_externally_managed(&runner, "python3"));
    }

    #[test]
    fn unmanaged_when_interpreter_missing() {
        let runner = StubRunner::new();
        assert!(!is_externally_managed(&runner, "python3"));
    }

    #[test]
    fn unmanaged_on_empty_sysconfig_output() {
        let runner = StubRunner::new().succeeds(SYSCONFIG_PROBE, "\n");
        assert!(!is_externally_managed(&runner, "python3"));
    }

    #[test]
    fn marker_must_be_a_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(MARKER_FILE)).unwrap();

        assert!(!marker_present(temp.path()));
    }
}
