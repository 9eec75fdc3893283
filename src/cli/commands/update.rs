//! The `update` command.

use super::dispatcher::{Command, CommandResult};
use crate::flows::run_update;
use crate::shell::SystemRunner;
use crate::ui::UserInterface;

/// The update command implementation.
pub struct UpdateCommand;

impl UpdateCommand {
    /// Create a new update command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for UpdateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        run_update(&SystemRunner, ui)?;
        Ok(CommandResult::success())
    }
}
