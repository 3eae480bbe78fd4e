use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install into the current directory:\n    groundwork install\n\n\
                   Install for a specific platform:\n    groundwork install --platform codex\n\n\
                   Preview without writing:\n    groundwork install --dry-run\n\n\
                   Overwrite a previous install:\n    groundwork install --force")]
pub struct InstallArgs {
    /// Project directory (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Target platform: cursor, claude, codex, copilot
    #[arg(long, short = 'p', value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Overwrite existing Groundwork files
    #[arg(long)]
    pub force: bool,

    /// Show planned writes without modifying files
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt (implied in CI or when output is not a terminal)
    #[arg(long, short = 'y')]
    pub yes: bool,
}
