//! Per-manager "already installed" queries.
//!
//! Each package manager gets one normalized boolean query. Neither query
//! installs anything as a side effect.

use crate::shell::{CommandRunner, RunOutcome};
use crate::PACKAGE_NAME;

/// Whether pip reports the package as installed (`pip show` exits 0).
pub fn installed_via_pip(runner: &dyn CommandRunner, pip: &str) -> bool {
    runner.probe(pip, &["show", PACKAGE_NAME]).success()
}

/// Whether pipx has the package registered.
///
/// `pipx list --short` prints one `<name> <version>` line per installed
/// package, with names normalized to lowercase; the match is on the first
/// token, case-insensitively.
pub fn installed_via_pipx(runner: &dyn CommandRunner) -> bool {
    match runner.probe("pipx", &["list", "--short"]) {
        RunOutcome::Exited(out) if out.success => out.stdout.lines().any(|line| {
            line.split_whitespace()
                .next()
                .is_some_and(|name| name.eq_ignore_ascii_case(PACKAGE_NAME))
        }),
        _ => false,
    }
}
