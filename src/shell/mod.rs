//! Child process execution.

pub mod runner;

pub use runner::{CommandOutput, CommandRunner, RunOutcome, StubRunner, SystemRunner};
