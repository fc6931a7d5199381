//! # Inbox Organizer
//!
//! Moves notes out of the inbox into the folder named by the `category` key
//! of their frontmatter. Independent of the harvest pipeline: it only reads
//! notes that are already on disk.

pub mod frontmatter;

use std::fs;
use std::path::{Path, PathBuf};

pub use frontmatter::{Frontmatter, read_category};

#[derive(Debug, thiserror::Error)]
pub enum OrganizeError {
    #[error("Invalid directory: {0}")]
    InvalidDir(PathBuf),
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Category keys and the vault folder each one lives in.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    entries: Vec<(String, String)>,
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new([
            ("get", "10. GCCS process/11. Get"),
            ("connect", "10. GCCS process/12. Connect"),
            ("create", "10. GCCS process/13. Create"),
            ("share", "10. GCCS process/14. Share"),
            ("projects", "20. Projects"),
            ("assets", "50. Assets"),
            ("outputs", "60. Outputs"),
            ("references", "80. References"),
            ("settings", "90. Settings"),
        ])
    }
}

impl CategoryMap {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, folder)| (key.to_lowercase(), folder.to_string()))
                .collect(),
        }
    }

    /// Folder path segments for a category such as `get/ai`.
    ///
    /// The first segment is looked up case-insensitively; an unknown key is
    /// used as a folder name itself. Remaining segments are appended as-is.
    pub fn segments(&self, category: &str) -> Vec<String> {
        let mut parts = category.split('/');
        let base = parts.next().unwrap_or_default().to_lowercase();
        let mapped = self
            .entries
            .iter()
            .find(|(key, _)| *key == base)
            .map_or(base.as_str(), |(_, folder)| folder.as_str());

        mapped
            .split('/')
            .chain(parts)
            .map(str::to_string)
            .collect()
    }
}

/// Walks `segments` down from `root`, reusing existing folders whose names
/// match case-insensitively.
///
/// Only the last segment may be missing (it will be created by the caller);
/// returns `None` if an earlier one does not exist.
pub fn resolve_destination(root: &Path, segments: &[String]) -> Result<Option<PathBuf>, OrganizeError> {
    if !root.exists() {
        log::warn!("Folder did not exist and was created: {}", root.display());
        fs::create_dir_all(root)?;
    }

    let mut current = root.to_path_buf();
    for part in segments {
        if !current.exists() {
            log::warn!("Path does not exist: {}", current.display());
            return Ok(None);
        }
        let existing = fs::read_dir(&current)?
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .find(|name| name.to_lowercase() == part.to_lowercase());
        current.push(existing.as_deref().unwrap_or(part));
    }

    Ok(Some(current))
}

#[derive(Debug, Default)]
pub struct OrganizeReport {
    /// `(from, to)` for every note moved.
    pub moved: Vec<(PathBuf, PathBuf)>,
    /// Notes left in place: no category, or no destination.
    pub skipped: Vec<PathBuf>,
    /// Notes whose move failed, with the error.
    pub failed: Vec<(PathBuf, String)>,
}

/// Moves every categorised `*.md` note directly inside `inbox` to its
/// category folder under `vault`.
///
/// Per-note failures are logged and reported; they do not stop the run.
pub fn organize_inbox(
    vault: &Path,
    inbox: &Path,
    categories: &CategoryMap,
) -> Result<OrganizeReport, OrganizeError> {
    if !inbox.is_dir() {
        return Err(OrganizeError::InvalidDir(inbox.to_path_buf()));
    }

    let pattern = format!("{}/*.md", glob::Pattern::escape(&inbox.to_string_lossy()));
    let mut report = OrganizeReport::default();

    for entry in glob::glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Skipping unreadable inbox entry: {e}");
                continue;
            }
        };
        let Some(category) = read_category(&path) else {
            report.skipped.push(path);
            continue;
        };

        let segments = categories.segments(&category);
        let Some(dest_dir) = resolve_destination(vault, &segments)? else {
            report.skipped.push(path);
            continue;
        };

        match move_into(&path, &dest_dir) {
            Ok(dest) => {
                log::info!(
                    "Moved {} -> {}",
                    path.file_name().unwrap_or_default().to_string_lossy(),
                    dest_dir.display()
                );
                report.moved.push((path, dest));
            }
            Err(e) => {
                log::error!("Failed to move {}: {e}", path.display());
                report.failed.push((path, e.to_string()));
            }
        }
    }

    Ok(report)
}

fn move_into(file: &Path, dest_dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dest_dir)?;
    let dest = dest_dir.join(file.file_name().unwrap_or_default());
    if fs::rename(file, &dest).is_err() {
        // Across filesystems rename fails; copy then delete instead.
        fs::copy(file, &dest)?;
        fs::remove_file(file)?;
    }
    Ok(dest)
}
