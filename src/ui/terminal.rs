//! Terminal UI implementation.

use super::theme::Theme;
use super::UserInterface;

/// [`UserInterface`] that writes to the terminal.
///
/// Status lines go to stdout; errors go to stderr so they survive piping.
pub struct TerminalUI {
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new(Theme::new())
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn hint(&mut self, msg: &str) {
        println!("{}", self.theme.format_hint(msg));
    }
}
