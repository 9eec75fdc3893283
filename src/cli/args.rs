//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Bootstrap installer for the SuperClaude Python package.
#[derive(Debug, Parser)]
#[command(name = "superclaude-bootstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install SuperClaude and run its setup
    Install,

    /// Update SuperClaude and run its updater
    Update,

    /// Show the detected Python environment and the install method that
    /// would be used
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_install_subcommand() {
        let cli = Cli::parse_from(["superclaude-bootstrap", "install"]);
        assert!(matches!(cli.command, Commands::Install));
        assert!(!cli.debug);
    }

    #[test]
    fn parses_update_with_global_flags() {
        let cli = Cli::parse_from(["superclaude-bootstrap", "update", "--debug", "--no-color"]);
        assert!(matches!(cli.command, Commands::Update));
        assert!(cli.debug);
        assert!(cli.no_color);
    }

    #[test]
    fn parses_doctor_json() {
        let cli = Cli::parse_from(["superclaude-bootstrap", "doctor", "--json"]);
        match cli.command {
            Commands::Doctor(args) => assert!(args.json),
            _ => panic!("expected doctor"),
        }
    }
}
