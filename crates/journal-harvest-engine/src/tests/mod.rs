//! Shared helpers for filesystem tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_vault() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes `content` to `relative` under `root`, creating parent folders.
pub fn create_test_file(root: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = root.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Names of the `.md` files directly inside `dir`, sorted.
pub fn markdown_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read dir")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".md"))
        .collect();
    names.sort();
    names
}
