//! Package manager detection.

use crate::shell::CommandRunner;

/// pip invocation names to try, in order.
const PIP_CANDIDATES: &[&str] = &["pip3", "pip"];

/// Locate the pip executable.
pub fn detect_pip(runner: &dyn CommandRunner) -> Option<String> {
    first_responding(runner, PIP_CANDIDATES)
}

/// Locate the pipx executable.
pub fn detect_pipx(runner: &dyn CommandRunner) -> Option<String> {
    first_responding(runner, &["pipx"])
}

/// Return the first candidate whose `--version` probe succeeds.
fn first_responding(runner: &dyn CommandRunner, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|c| runner.probe(c, &["--version"]).success())
        .map(|c| (*c).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::StubRunner;

    #[test]
    fn detect_pip_prefers_pip3() {
        let runner = StubRunner::new()
            .succeeds("pip3 --version", "pip 24.0")
            .succeeds("pip --version", "pip 24.0");

        assert_eq!(detect_pip(&runner).as_deref(), Some("pip3"));
    }

    #[test]
    fn detect_pip_falls_back_to_pip() {
        let runner = StubRunner::new().succeeds("pip --version", "pip 23.1");

        assert_eq!(detect_pip(&runner).as_deref(), Some("pip"));
    }

    #[test]
    fn detect_pip_none_when_absent() {
        let runner = StubRunner::new();
        assert!(detect_pip(&runner).is_none());
    }

    #[test]
    fn detect_pip_none_when_probe_fails() {
        let runner = StubRunner::new().fails("pip3 --version", 127);
        assert!(detect_pip(&runner).is_none());
    }

    #[test]
    fn detect_pipx_when_present() {
        let runner = StubRunner::new().succeeds("pipx --version", "1.5.0");
        assert_eq!(detect_pipx(&runner).as_deref(), Some("pipx"));
    }

    #[test]
    fn detect_pipx_none_when_absent() {
        let runner = StubRunner::new();
        assert!(detect_pipx(&runner).is_none());
    }
}
