//! CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use superclaude_bootstrap::cli::{Cli, CommandDispatcher};
use superclaude_bootstrap::ui::{should_use_colors, TerminalUI, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("superclaude_bootstrap=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("superclaude_bootstrap=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("starting with args: {:?}", cli);

    let theme = if cli.no_color || !should_use_colors() {
        console::set_colors_enabled(false);
        Theme::plain()
    } else {
        Theme::new()
    };
    let mut ui = TerminalUI::new(theme);

    let dispatcher = CommandDispatcher::new();
    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            tracing::debug!("fatal: {}", e);
            ExitCode::from(1)
        }
    }
}
