//! Atomic file writing
//!
//! Content is written to a uniquely named temporary file in the destination
//! directory and renamed into place, so a reader never observes a partially
//! written file. A failed write removes its temporary artifact before the
//! error surfaces.

use std::io::Write;
use std::path::Path;

use crate::error::{GroundworkError, Result};

/// Result of one planned write, in plan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Destination now contains exactly the planned content
    Written,
    /// Dry run: nothing touched
    Skipped,
    /// The write failed; the run stops here
    Failed(String),
}

fn write_error(path: &Path, e: std::io::Error) -> GroundworkError {
    GroundworkError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    Ok(())
}

/// Write `content` to `path` atomically.
///
/// In dry-run mode this performs zero filesystem mutation, including
/// directory creation. Without `force_allowed`, an existing destination is
/// refused even when the run-level gate was passed; a file can appear
/// between scan and write.
pub fn write(path: &Path, content: &[u8], dry_run: bool, force_allowed: bool) -> Result<WriteOutcome> {
    if dry_run {
        return Ok(WriteOutcome::Skipped);
    }

    ensure_parent_dir(path)?;

    if path.exists() && !force_allowed {
        return Err(GroundworkError::DestinationExists {
            path: path.display().to_string(),
        });
    }

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("groundwork");

    // Builder guarantees a name that cannot collide with a planned
    // destination; the temp file is deleted on drop if not persisted.
    let mut temp = tempfile::Builder::new()
        .prefix(&format!("{file_name}.tmp-"))
        .tempfile_in(dir)
        .map_err(|e| write_error(path, e))?;

    temp.write_all(content).map_err(|e| write_error(path, e))?;
    temp.as_file().sync_all().map_err(|e| write_error(path, e))?;

    temp.persist(path)
        .map_err(|e| write_error(path, e.error))?;

    Ok(WriteOutcome::Written)
}
