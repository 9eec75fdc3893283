//! Synchronous child process execution.
//!
//! Probing logic repeatedly needs to ask "does this executable exist?"
//! without aborting, so a missing executable is reported as a distinct
//! [`RunOutcome::NotFound`] value rather than an error. "Ran and failed"
//! (nonzero exit) stays distinguishable from "could not be located".
//!
//! The [`CommandRunner`] trait is the seam between the flows and the real
//! system: production code uses [`SystemRunner`], tests script a
//! [`StubRunner`] with canned responses.

use std::cell::RefCell;
use std::collections::HashMap;
use std::process::{Command, Stdio};

/// Captured result of a command that ran to completion.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty when stdio was inherited).
    pub stdout: String,

    /// Standard error (empty when stdio was inherited).
    pub stderr: String,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Create a success output with the given streams.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure output.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Outcome of attempting to run an external command.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The command was located and ran to completion.
    Exited(CommandOutput),
    /// The executable could not be located.
    NotFound,
}

impl RunOutcome {
    /// Whether the command ran and exited with code 0.
    pub fn success(&self) -> bool {
        matches!(self, Self::Exited(out) if out.success)
    }

    /// Exit code, if the command ran.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exited(out) => out.exit_code,
            Self::NotFound => None,
        }
    }
}

/// Executes external commands on behalf of probes and flows.
pub trait CommandRunner {
    /// Run a command with captured output. Used for side-effect-free probes.
    fn probe(&self, program: &str, args: &[&str]) -> RunOutcome;

    /// Run a command with stdio inherited from this process, streaming its
    /// output directly to the terminal. Used for install/upgrade commands
    /// and the package's own CLI.
    fn stream(&self, program: &str, args: &[&str]) -> RunOutcome;
}

/// [`CommandRunner`] backed by real child processes.
pub struct SystemRunner;

impl SystemRunner {
    fn run(&self, program: &str, args: &[&str], capture: bool) -> RunOutcome {
        let mut cmd = Command::new(program);
        cmd.args(args);

        if capture {
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
            cmd.stdin(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
            cmd.stdin(Stdio::inherit());
        }

        match cmd.output() {
            Ok(output) => {
                let stdout = if capture {
                    String::from_utf8_lossy(&output.stdout).to_string()
                } else {
                    String::new()
                };
                let stderr = if capture {
                    String::from_utf8_lossy(&output.stderr).to_string()
                } else {
                    String::new()
                };

                if output.status.success() {
                    RunOutcome::Exited(CommandOutput::success(stdout, stderr))
                } else {
                    RunOutcome::Exited(CommandOutput::failure(
                        output.status.code(),
                        stdout,
                        stderr,
                    ))
                }
            }
            Err(e) => {
                tracing::debug!("could not spawn '{} {}': {}", program, args.join(" "), e);
                RunOutcome::NotFound
            }
        }
    }
}

impl CommandRunner for SystemRunner {
    fn probe(&self, program: &str, args: &[&str]) -> RunOutcome {
        self.run(program, args, true)
    }

    fn stream(&self, program: &str, args: &[&str]) -> RunOutcome {
        self.run(program, args, false)
    }
}

/// [`CommandRunner`] with scripted responses, for tests.
///
/// Responses are keyed by the full command line (`"pipx install SuperClaude"`).
/// Unscripted commands report [`RunOutcome::NotFound`]. Every invocation is
/// recorded so tests can assert on what ran (and what didn't).
#[derive(Default)]
pub struct StubRunner {
    responses: HashMap<String, RunOutcome>,
    calls: RefCell<Vec<String>>,
}

impl StubRunner {
    /// Create a stub with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a command line to succeed with the given stdout.
    pub fn succeeds(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses.insert(
            command_line.to_string(),
            RunOutcome::Exited(CommandOutput::success(stdout.to_string(), String::new())),
        );
        self
    }

    /// Script a command line to run and exit with the given nonzero code.
    pub fn fails(mut self, command_line: &str, code: i32) -> Self {
        self.responses.insert(
            command_line.to_string(),
            RunOutcome::Exited(CommandOutput::failure(
                Some(code),
                String::new(),
                String::new(),
            )),
        );
        self
    }

    /// Command lines that were invoked, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether a command line was invoked at least once.
    pub fn was_called(&self, command_line: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command_line)
    }

    fn respond(&self, program: &str, args: &[&str]) -> RunOutcome {
        let line = command_line(program, args);
        self.calls.borrow_mut().push(line.clone());
        self.responses
            .get(&line)
            .cloned()
            .unwrap_or(RunOutcome::NotFound)
    }
}

impl CommandRunner for StubRunner {
    fn probe(&self, program: &str, args: &[&str]) -> RunOutcome {
        self.respond(program, args)
    }

    fn stream(&self, program: &str, args: &[&str]) -> RunOutcome {
        self.respond(program, args)
    }
}

/// Render a program and argument list as a single display string.
pub fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
