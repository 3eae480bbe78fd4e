//! Conflict scanning for pre-existing install artifacts
//!
//! Read-only: the scanner reports which candidate paths exist; gating
//! policy belongs to the planner.

use std::path::{Path, PathBuf};

use super::catalog::Catalog;

/// Return the subset of the catalog's candidate paths that exist on disk
pub fn existing_conflicts(project_root: &Path, catalog: &Catalog) -> Vec<PathBuf> {
    catalog
        .candidate_paths(project_root)
        .into_iter()
        .filter(|p| p.exists())
        .collect()
}
