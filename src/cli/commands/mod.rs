//! CLI command implementations.

pub mod completions;
pub mod dispatcher;
pub mod doctor;
pub mod install;
pub mod update;
