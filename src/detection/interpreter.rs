//! Python interpreter detection.

use regex::Regex;

use crate::shell::{CommandRunner, RunOutcome};

/// Interpreter invocation names to try, in order. The versioned name comes
/// first so a stray Python 2 `python` doesn't shadow a usable `python3`.
const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Minimum acceptable major version.
const MIN_MAJOR_VERSION: u32 = 3;

/// Locate a Python interpreter with a compatible major version.
///
/// Probes each candidate with `--version` and returns the first that exists
/// and reports major version >= 3. Returns `None` when no candidate
/// qualifies.
pub fn detect_python(runner: &dyn CommandRunner) -> Option<String> {
    for candidate in INTERPRETER_CANDIDATES {
        if let RunOutcome::Exited(out) = runner.probe(candidate, &["--version"]) {
            if !out.success {
                continue;
            }
            // Python 2 printed its version banner to stderr; search both.
            let combined = format!("{}\n{}", out.stdout, out.stderr);
            match extract_major_version(&combined) {
                Some(major) if major >= MIN_MAJOR_VERSION => {
                    tracing::debug!("found interpreter '{}' (major {})", candidate, major);
                    return Some((*candidate).to_string());
                }
                Some(major) => {
                    tracing::debug!("skipping '{}': major version {}", candidate, major);
                }
                None => {
                    tracing::debug!("skipping '{}': unrecognized version output", candidate);
                }
            }
        }
    }
    None
}

/// Extract the major version number from `--version` output.
fn extract_major_version(output: &str) -> Option<u32> {
    let re = Regex::new(r"Python\s+(\d+)").ok()?;
    re.captures(output)?.get(1)?.as_str().parse().ok()
}
