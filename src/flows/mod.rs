//! The installer and updater flows.
//!
//! Both flows are strictly linear: probe the interpreter, probe the package
//! managers, resolve a method, act, then hand off to the package's own CLI.
//! There is no retry and no fallback once a method has been chosen — a failed
//! external command ends the run.

pub mod install;
pub mod update;

pub use install::run_install;
pub use update::run_update;
