//! Common test utilities for Groundwork integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Recursive snapshot of the project tree: sorted (relative path, content)
    /// pairs, with directories carried as empty-content entries
    pub fn snapshot(&self) -> Vec<(PathBuf, Vec<u8>)> {
        let mut entries = Vec::new();
        snapshot_into(&self.path, &self.path, &mut entries);
        entries.sort();
        entries
    }
}

fn snapshot_into(root: &Path, dir: &Path, entries: &mut Vec<(PathBuf, Vec<u8>)>) {
    for entry in std::fs::read_dir(dir).expect("Failed to read directory") {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .expect("entry outside root")
            .to_path_buf();
        if path.is_dir() {
            entries.push((relative, Vec::new()));
            snapshot_into(root, &path, entries);
        } else {
            let content = std::fs::read(&path).expect("Failed to read file");
            entries.push((relative, content));
        }
    }
}
