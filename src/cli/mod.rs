//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod install;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;

/// Groundwork - safe scaffolding installer
///
/// Materializes the Groundwork framework files into a project directory
/// without clobbering pre-existing state.
#[derive(Parser, Debug)]
#[command(
    name = "groundwork",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Safe scaffolding installer for AI-assisted development projects",
    long_about = "Groundwork installs a small, fixed set of rule, directive, and documentation \
                  files into a project directory. Pre-existing files block the run unless \
                  overwriting is requested explicitly, and every write is atomic.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  groundwork install                    \x1b[90m# Install into the current directory\x1b[0m\n   \
                  groundwork install --platform claude  \x1b[90m# Write CLAUDE.md as the rule file\x1b[0m\n   \
                  groundwork install --dry-run          \x1b[90m# Preview the plan, touch nothing\x1b[0m\n   \
                  groundwork install --force            \x1b[90m# Overwrite an existing install\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the Groundwork files into a project directory
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_install() {
        let cli = Cli::try_parse_from(["groundwork", "install"]).unwrap();
        assert!(matches!(cli.command, Commands::Install(_)));
    }

    #[test]
    fn test_cli_parsing_install_flags() {
        let cli = Cli::try_parse_from([
            "groundwork",
            "install",
            "/tmp/project",
            "--platform",
            "claude",
            "--force",
            "--dry-run",
            "-y",
        ])
        .unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.directory, Some(PathBuf::from("/tmp/project")));
                assert_eq!(args.platform, Some("claude".to_string()));
                assert!(args.force);
                assert!(args.dry_run);
                assert!(args.yes);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["groundwork", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["groundwork"]).is_err());
    }
}
