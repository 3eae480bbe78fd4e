//! Install layout catalog and path resolution
//!
//! The catalog is pure data: which files a run writes, which paths signal a
//! prior install, and where the legacy context file lives. Resolving it
//! against a project root is deterministic path joining with no I/O.

use std::path::{Path, PathBuf};

use crate::platform::Platform;
use crate::templates::TemplateId;

/// Directory under the project root that holds all installed state
pub const MARKER_DIR: &str = ".groundwork";

/// Marker directory name used by pre-1.0 releases
pub const LEGACY_MARKER_DIR: &str = "groundwork";

/// Context file name inside the marker directory
pub const CONTEXT_FILE: &str = "context.json";

/// Context file written directly at the project root by pre-1.0 releases
pub const LEGACY_CONTEXT_FILE: &str = "project-context.json";

/// Root-level directives file
pub const DIRECTIVES_FILE: &str = "groundwork.json";

/// Content source for one catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Static content loaded from the template store
    Template(TemplateId),
    /// The computed (and possibly legacy-merged) project context
    Context,
}

/// One file the installer plans to write
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Destination relative to the project root
    pub relative_path: PathBuf,
    /// Where the content comes from
    pub source: ContentSource,
    /// Whether an unreadable source aborts the whole run
    pub required: bool,
}

/// The fixed install layout for one platform selection
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Planned writes, in write order: the context file first, then the
    /// root files, then documentation
    pub entries: Vec<CatalogEntry>,
    /// Paths (relative to the project root) whose existence indicates a
    /// prior install and gates a force-less run
    pub conflict_candidates: Vec<PathBuf>,
    /// Root-relative location of the legacy context file to migrate
    pub legacy_context: PathBuf,
}

impl Catalog {
    /// Build the default catalog; an absent platform is the minimal
    /// variant and installs the cursor rule file.
    pub fn for_platform(platform: Option<Platform>) -> Self {
        let platform = platform.unwrap_or(Platform::Cursor);
        let marker = PathBuf::from(MARKER_DIR);

        let entries = vec![
            CatalogEntry {
                relative_path: marker.join(CONTEXT_FILE),
                source: ContentSource::Context,
                required: true,
            },
            CatalogEntry {
                relative_path: PathBuf::from(DIRECTIVES_FILE),
                source: ContentSource::Template(TemplateId::Directives),
                required: true,
            },
            CatalogEntry {
                relative_path: platform.rules_path(),
                source: ContentSource::Template(TemplateId::Rules(platform)),
                required: true,
            },
            CatalogEntry {
                relative_path: marker.join("PRINCIPLES.md"),
                source: ContentSource::Template(TemplateId::Principles),
                required: true,
            },
            CatalogEntry {
                relative_path: marker.join("WORKFLOW.md"),
                source: ContentSource::Template(TemplateId::Workflow),
                required: true,
            },
        ];

        let conflict_candidates = vec![
            platform.rules_path(),
            PathBuf::from(DIRECTIVES_FILE),
            PathBuf::from(MARKER_DIR),
            PathBuf::from(LEGACY_MARKER_DIR),
            PathBuf::from(LEGACY_CONTEXT_FILE),
        ];

        Self {
            entries,
            conflict_candidates,
            legacy_context: PathBuf::from(LEGACY_CONTEXT_FILE),
        }
    }

    /// Absolute destination paths in plan order
    pub fn destinations(&self, project_root: &Path) -> Vec<PathBuf> {
        self.entries
            .iter()
            .map(|e| project_root.join(&e.relative_path))
            .collect()
    }

    /// Absolute conflict candidate paths
    pub fn candidate_paths(&self, project_root: &Path) -> Vec<PathBuf> {
        self.conflict_candidates
            .iter()
            .map(|p| project_root.join(p))
            .collect()
    }

    /// Absolute path of the legacy context file
    pub fn legacy_context_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.legacy_context)
    }
}
