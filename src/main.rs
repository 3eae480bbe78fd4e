//! Groundwork - safe scaffolding installer
//!
//! Installs a fixed set of rule, directive, and documentation files into a
//! project directory while protecting pre-existing project state. Existing
//! files gate the run, writes are atomic per file, and dry-run mode never
//! mutates the filesystem.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod error;
mod installer;
mod platform;
mod progress;
mod templates;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("{help}");
        }
        std::process::exit(1);
    }
}
