//! The `install` command.

use super::dispatcher::{Command, CommandResult};
use crate::flows::run_install;
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

/// The install command implementation.
pub struct InstallCommand;

impl InstallCommand {
    /// Create a new install command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for InstallCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        run_install(&SystemRunner, ui)?;
        Ok(CommandResult::success())
    }
}
