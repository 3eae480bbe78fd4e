//! Installation planning and orchestration
//!
//! The planner runs one installation as a strict sequence: confirmation,
//! conflict gate, eager content resolution, legacy context migration, then
//! ordered atomic writes. Template and legacy-parse failures happen before
//! any mutation; a mid-sequence write failure stops the run and reports
//! which files were already written. There is no automatic rollback and no
//! retry; the caller decides both.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{GroundworkError, Result};
use crate::platform::Platform;
use crate::templates::TemplateStore;

use super::catalog::{Catalog, ContentSource};
use super::context::{self, ProjectContext};
use super::scan;
use super::writer::{self, WriteOutcome};

/// Immutable input to one installation run, constructed at the boundary.
/// The engine never reads ambient process state.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    /// Absolute project root
    pub project_root: PathBuf,
    /// Skip the confirmation prompt (explicit flag, CI, or non-TTY output)
    pub non_interactive: bool,
    /// Compute and report the plan without mutating the filesystem
    pub dry_run: bool,
    /// Bypass the existing-file gate and overwrite in place
    pub force_overwrite: bool,
    /// Target platform; absent selects the minimal (cursor) layout
    pub platform: Option<Platform>,
}

/// One planned write with eagerly resolved content
#[derive(Debug, Clone)]
pub struct FileSpec {
    pub destination: PathBuf,
    pub content: Vec<u8>,
    #[allow(dead_code)]
    pub required: bool,
}

/// Ordered, duplicate-free sequence of planned writes
#[derive(Debug)]
pub struct InstallPlan {
    specs: Vec<FileSpec>,
}

impl InstallPlan {
    pub fn specs(&self) -> &[FileSpec] {
        &self.specs
    }

    pub fn destinations(&self) -> Vec<PathBuf> {
        self.specs.iter().map(|s| s.destination.clone()).collect()
    }
}

/// Per-file result paired with its destination, in plan order
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Terminal outcome of a whole run
#[derive(Debug)]
pub enum RunResult {
    /// Every planned write succeeded
    Completed { written: Vec<PathBuf> },
    /// Confirmation was declined before anything was scanned
    Cancelled,
    /// Pre-existing files without permission to overwrite; nothing written
    BlockedByExistingFiles { conflicts: Vec<PathBuf> },
    /// Dry run: the plan that a real run would write
    DryRunPreview { planned: Vec<PathBuf> },
    /// Fatal error, with whatever was written before it
    Failed {
        error: GroundworkError,
        written: Vec<PathBuf>,
    },
}

/// Run summary: the terminal result plus the per-file outcome sequence
#[derive(Debug)]
pub struct RunReport {
    pub result: RunResult,
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    fn terminal(result: RunResult) -> Self {
        Self {
            result,
            outcomes: Vec::new(),
        }
    }
}

/// Observer for per-file progress during the write loop
pub trait WriteObserver {
    fn on_outcome(&mut self, path: &Path, outcome: &WriteOutcome);
}

/// No-op observer
pub struct SilentObserver;

impl WriteObserver for SilentObserver {
    fn on_outcome(&mut self, _path: &Path, _outcome: &WriteOutcome) {}
}

/// Orchestrates one installation run
pub struct InstallPlanner<'a> {
    request: &'a InstallRequest,
    templates: &'a dyn TemplateStore,
    catalog: Catalog,
}

impl<'a> InstallPlanner<'a> {
    pub fn new(request: &'a InstallRequest, templates: &'a dyn TemplateStore) -> Self {
        let catalog = Catalog::for_platform(request.platform);
        Self {
            request,
            templates,
            catalog,
        }
    }

    /// Use a non-default catalog (e.g. a broader conflict candidate list)
    pub fn with_catalog(
        request: &'a InstallRequest,
        templates: &'a dyn TemplateStore,
        catalog: Catalog,
    ) -> Self {
        Self {
            request,
            templates,
            catalog,
        }
    }

    /// Execute the run. `confirmed` comes from the upstream prompt or the
    /// non-interactive fast path; declining cancels before any scan.
    pub fn run(&self, confirmed: bool, observer: &mut dyn WriteObserver) -> RunReport {
        if !confirmed {
            return RunReport::terminal(RunResult::Cancelled);
        }

        let root = &self.request.project_root;

        let conflicts = scan::existing_conflicts(root, &self.catalog);
        if !conflicts.is_empty() && !self.request.force_overwrite && !self.request.dry_run {
            return RunReport::terminal(RunResult::BlockedByExistingFiles { conflicts });
        }

        // Resolve all template content before any mutation
        let resolved = match self.resolve_templates() {
            Ok(resolved) => resolved,
            Err(error) => {
                return RunReport::terminal(RunResult::Failed {
                    error,
                    written: Vec::new(),
                });
            }
        };

        // Migrate the legacy context file; skipped wholly in dry-run so the
        // preview stays non-destructive
        let fresh = ProjectContext::new(root).to_value();
        let context_value = if self.request.dry_run {
            fresh
        } else {
            match context::migrate_legacy(root, &self.catalog, &fresh) {
                Ok(value) => value,
                Err(error) => {
                    return RunReport::terminal(RunResult::Failed {
                        error,
                        written: Vec::new(),
                    });
                }
            }
        };

        let plan = self.assemble_plan(resolved, &context_value);
        self.write_all(&plan, observer)
    }

    /// Load every template the catalog references; a required template
    /// that cannot be loaded fails the run here, pre-mutation.
    fn resolve_templates(&self) -> Result<Vec<Option<Vec<u8>>>> {
        self.catalog
            .entries
            .iter()
            .map(|entry| match entry.source {
                ContentSource::Template(id) => self.templates.load(id).map(Some),
                ContentSource::Context => Ok(None),
            })
            .collect()
    }

    fn assemble_plan(&self, resolved: Vec<Option<Vec<u8>>>, context_value: &Value) -> InstallPlan {
        let root = &self.request.project_root;
        let context_bytes = render_context(context_value);

        let specs = self
            .catalog
            .entries
            .iter()
            .zip(resolved)
            .map(|(entry, content)| FileSpec {
                destination: root.join(&entry.relative_path),
                content: content.unwrap_or_else(|| context_bytes.clone()),
                required: entry.required,
            })
            .collect();

        InstallPlan { specs }
    }

    fn write_all(&self, plan: &InstallPlan, observer: &mut dyn WriteObserver) -> RunReport {
        let mut outcomes = Vec::new();
        let mut written = Vec::new();

        for spec in plan.specs() {
            match writer::write(
                &spec.destination,
                &spec.content,
                self.request.dry_run,
                self.request.force_overwrite,
            ) {
                Ok(outcome) => {
                    if outcome == WriteOutcome::Written {
                        written.push(spec.destination.clone());
                    }
                    observer.on_outcome(&spec.destination, &outcome);
                    outcomes.push(FileOutcome {
                        path: spec.destination.clone(),
                        outcome,
                    });
                }
                Err(error) => {
                    let outcome = WriteOutcome::Failed(error.to_string());
                    observer.on_outcome(&spec.destination, &outcome);
                    outcomes.push(FileOutcome {
                        path: spec.destination.clone(),
                        outcome,
                    });
                    // First failure aborts the remaining writes
                    return RunReport {
                        result: RunResult::Failed { error, written },
                        outcomes,
                    };
                }
            }
        }

        let result = if self.request.dry_run {
            RunResult::DryRunPreview {
                planned: plan.destinations(),
            }
        } else {
            RunResult::Completed { written }
        };

        RunReport { result, outcomes }
    }
}

fn render_context(value: &Value) -> Vec<u8> {
    let mut bytes = serde_json::to_vec_pretty(value).unwrap_or_else(|_| b"{}".to_vec());
    bytes.push(b'\n');
    bytes
}
