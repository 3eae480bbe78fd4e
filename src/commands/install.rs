//! Install command implementation
//!
//! This command owns the process boundary around the installation engine:
//! 1. Resolve the target directory and platform selection
//! 2. Decide interactivity (explicit flag, CI, or non-terminal output)
//! 3. Ask for confirmation when interactive
//! 4. Run the planner and render its report
//!
//! The engine itself never reads flags, environment variables, or the
//! current directory; everything it needs arrives in the `InstallRequest`.

use std::path::{Path, PathBuf};

use console::Style;
use inquire::Confirm;

use crate::cli::InstallArgs;
use crate::error::{GroundworkError, Result};
use crate::installer::catalog::Catalog;
use crate::installer::planner::SilentObserver;
use crate::installer::{InstallPlanner, InstallRequest, RunReport, RunResult};
use crate::platform::Platform;
use crate::progress::ProgressDisplay;
use crate::templates::EmbeddedTemplates;

/// True when the CI environment variable is set to a truthy value
fn ci_env_truthy() -> bool {
    match std::env::var("CI") {
        Ok(value) => !value.is_empty() && value.to_lowercase() != "false",
        Err(_) => false,
    }
}

/// Non-interactive when requested explicitly, running under CI, or when
/// stdout is not a terminal
fn resolve_non_interactive(yes_flag: bool) -> bool {
    yes_flag || ci_env_truthy() || !console::user_attended()
}

fn resolve_project_root(directory: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match directory {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| GroundworkError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };
    std::path::absolute(&dir).map_err(|e| GroundworkError::IoError {
        message: format!("Failed to resolve {}: {}", dir.display(), e),
    })
}

fn confirm_install(root: &Path) -> Result<bool> {
    println!(
        "Installing Groundwork framework files into {}",
        Style::new().bold().apply_to(root.display())
    );
    Ok(Confirm::new("Proceed with installation?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?)
}

/// Run the install command
pub fn run(args: InstallArgs) -> Result<()> {
    let project_root = resolve_project_root(args.directory)?;
    let platform = args.platform.as_deref().map(Platform::from_id).transpose()?;

    let request = InstallRequest {
        project_root,
        non_interactive: resolve_non_interactive(args.yes),
        dry_run: args.dry_run,
        force_overwrite: args.force,
        platform,
    };

    let confirmed = if request.non_interactive {
        true
    } else {
        confirm_install(&request.project_root)?
    };

    let catalog = Catalog::for_platform(request.platform);
    let plan_len = catalog.entries.len() as u64;
    let templates = EmbeddedTemplates;
    let planner = InstallPlanner::with_catalog(&request, &templates, catalog);

    let report = if request.dry_run {
        planner.run(confirmed, &mut SilentObserver)
    } else {
        let mut progress = ProgressDisplay::new(plan_len);
        let report = planner.run(confirmed, &mut progress);
        match report.result {
            RunResult::Failed { .. } => progress.abandon(),
            _ => progress.finish(),
        }
        report
    };

    render_report(&request, report)
}

fn render_report(request: &InstallRequest, report: RunReport) -> Result<()> {
    match report.result {
        RunResult::Completed { .. } => {
            for outcome in &report.outcomes {
                println!(
                    "{} Wrote {}",
                    Style::new().green().apply_to("✓"),
                    rel(request, &outcome.path)
                );
            }
            println!(
                "\n{} Groundwork installed into {}",
                Style::new().green().apply_to("✓"),
                request.project_root.display()
            );
            println!("\nNext steps:");
            println!("1. Open the rule file and groundwork.json in your AI coding tool");
            println!("2. Resolve the unknowns recorded in .groundwork/context.json");
            Ok(())
        }
        RunResult::DryRunPreview { planned } => {
            for path in &planned {
                println!("[DRY RUN] Would write {}", rel(request, path));
            }
            println!("\n[DRY RUN] No files written.");
            Ok(())
        }
        RunResult::Cancelled => {
            println!("Installation cancelled. No changes were made.");
            Ok(())
        }
        RunResult::BlockedByExistingFiles { conflicts } => {
            Err(GroundworkError::ExistingFilesDetected {
                paths: conflicts.iter().map(|p| rel(request, p)).collect(),
            })
        }
        RunResult::Failed { error, written } => {
            if !written.is_empty() {
                eprintln!("Files written before the failure:");
                for path in &written {
                    eprintln!("  - {}", rel(request, path));
                }
            }
            Err(error)
        }
    }
}

/// Display a path relative to the project root where possible
fn rel(request: &InstallRequest, path: &Path) -> String {
    path.strip_prefix(&request.project_root)
        .unwrap_or(path)
        .display()
        .to_string()
}
