//! Project context construction and legacy-file migration
//!
//! The context file records project metadata, the decision log, and the
//! open unknowns. Pre-1.0 releases wrote it directly at the project root;
//! when that legacy file is present it is merged into the fresh context
//! (fresh values win, unrecognized legacy keys survive) and then removed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GroundworkError, Result};

use super::catalog::Catalog;

/// Structured content of `.groundwork/context.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    /// Project identifier, derived from the project root's directory name
    pub project_name: String,
    /// Append-only log of resolved decisions
    pub decision_log: Vec<String>,
    /// Outstanding decisions the team still has to make
    pub unknowns: Vec<String>,
}

impl ProjectContext {
    /// Fresh context for a project that has no prior state
    pub fn new(project_root: &Path) -> Self {
        let project_name = project_root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("project")
            .to_string();

        Self {
            project_name,
            decision_log: Vec::new(),
            unknowns: vec![
                "Define core features".to_string(),
                "Specify API contracts".to_string(),
                "Choose components".to_string(),
            ],
        }
    }

    /// JSON value form, used as the overlay in legacy merges
    pub fn to_value(&self) -> Value {
        // Serializing a plain struct with string fields cannot fail
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

/// Shallow overlay merge: keys defined by `overlay` win, remaining keys of
/// `base` are preserved. Non-object inputs yield the overlay unchanged.
pub fn merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Object(base_map), Value::Object(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        merged.insert(key.clone(), value.clone());
    }
    Value::Object(merged)
}

/// Migrate the legacy root context file into the fresh context, if present.
///
/// Returns the context value to write. The legacy file is removed after a
/// successful merge; a malformed legacy file fails the run rather than
/// being discarded.
pub fn migrate_legacy(project_root: &Path, catalog: &Catalog, fresh: &Value) -> Result<Value> {
    let legacy_path = catalog.legacy_context_path(project_root);
    if !legacy_path.exists() {
        return Ok(fresh.clone());
    }

    let raw = fs::read_to_string(&legacy_path).map_err(|e| GroundworkError::FileReadFailed {
        path: legacy_path.display().to_string(),
        reason: e.to_string(),
    })?;

    let legacy: Value =
        serde_json::from_str(&raw).map_err(|e| GroundworkError::ContextParseFailed {
            path: legacy_path.display().to_string(),
            reason: e.to_string(),
        })?;

    let merged = merge(&legacy, fresh);

    fs::remove_file(&legacy_path).map_err(|e| GroundworkError::IoError {
        message: format!("Failed to remove {}: {}", legacy_path.display(), e),
    })?;

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_merge_precedence() {
        let base = json!({"a": 1, "b": 2});
        let overlay = json!({"b": 3, "c": 4});
        assert_eq!(merge(&base, &overlay), json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn test_merge_is_shallow() {
        let base = json!({"nested": {"kept": true, "lost": true}});
        let overlay = json!({"nested": {"kept": false}});
        // Overlay replaces the whole nested object
        assert_eq!(merge(&base, &overlay), json!({"nested": {"kept": false}}));
    }

    #[test]
    fn test_merge_with_non_object_base() {
        let overlay = json!({"a": 1});
        assert_eq!(merge(&json!(null), &overlay), overlay);
    }

    #[test]
    fn test_fresh_context_uses_directory_name() {
        let ctx = ProjectContext::new(Path::new("/work/my-app"));
        assert_eq!(ctx.project_name, "my-app");
        assert!(ctx.decision_log.is_empty());
        assert!(!ctx.unknowns.is_empty());
    }

    #[test]
    fn test_migrate_without_legacy_returns_fresh() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::for_platform(Some(Platform::Cursor));
        let fresh = ProjectContext::new(temp.path()).to_value();

        let result = migrate_legacy(temp.path(), &catalog, &fresh).unwrap();
        assert_eq!(result, fresh);
    }

    #[test]
    fn test_migrate_merges_and_removes_legacy() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::for_platform(Some(Platform::Cursor));
        let legacy_path = catalog.legacy_context_path(temp.path());
        std::fs::write(&legacy_path, r#"{"techStack": "rust", "unknowns": ["old"]}"#).unwrap();

        let fresh = ProjectContext::new(temp.path()).to_value();
        let merged = migrate_legacy(temp.path(), &catalog, &fresh).unwrap();

        assert!(!legacy_path.exists());
        // Legacy-only key preserved, shared key overwritten by fresh value
        assert_eq!(merged["techStack"], json!("rust"));
        assert_eq!(merged["unknowns"], fresh["unknowns"]);
    }

    #[test]
    fn test_migrate_fails_on_malformed_legacy() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::for_platform(Some(Platform::Cursor));
        let legacy_path = catalog.legacy_context_path(temp.path());
        std::fs::write(&legacy_path, "not json {").unwrap();

        let fresh = ProjectContext::new(temp.path()).to_value();
        let err = migrate_legacy(temp.path(), &catalog, &fresh).unwrap_err();

        assert!(matches!(err, GroundworkError::ContextParseFailed { .. }));
        // The malformed file must not be deleted
        assert!(legacy_path.exists());
    }
}
