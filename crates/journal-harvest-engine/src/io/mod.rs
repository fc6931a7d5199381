use crate::models::{DateWindow, JournalFile};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Journal folders of the outliner's own bookkeeping contain this.
const IGNORED_PATH_MARKER: &str = "logseq";

const LAST_RUN_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDir(String),
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Invalid last run date '{value}' in {path}")]
    InvalidLastRun { path: PathBuf, value: String },
}

/// What to do when a note with the same name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Write `name (1).md`, `name (2).md`, ... instead.
    Rename,
    /// Replace the existing note.
    Overwrite,
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Find journal pages directly inside `journal_dir` whose date is in `window`.
///
/// Files without a journal date stem, and anything under an outliner
/// bookkeeping path, are skipped. Results are sorted by date.
pub fn scan_journal_files(
    journal_dir: &Path,
    window: &DateWindow,
) -> Result<Vec<JournalFile>, IoError> {
    validate_dir(journal_dir)?;

    let pattern = format!(
        "{}/*.md",
        glob::Pattern::escape(&journal_dir.to_string_lossy())
    );
    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(|e| IoError::Io(e.into_error()))?;
        if !path.is_file() || path.to_string_lossy().contains(IGNORED_PATH_MARKER) {
            continue;
        }
        if let Some(journal) = JournalFile::from_path(path)
            && window.contains(journal.date())
        {
            files.push(journal);
        }
    }

    files.sort_by(|a, b| a.date().cmp(&b.date()).then_with(|| a.path().cmp(b.path())));
    Ok(files)
}

/// Write a note into `dir` as `<stem>.md`, returning the path written.
///
/// Creates `dir` if needed. With [`CollisionPolicy::Rename`] an existing
/// note is kept and a numbered sibling is written instead.
pub fn write_note(
    dir: &Path,
    stem: &str,
    content: &str,
    policy: CollisionPolicy,
) -> Result<PathBuf, IoError> {
    fs::create_dir_all(dir).map_err(IoError::Io)?;

    let mut path = dir.join(format!("{stem}.md"));
    if policy == CollisionPolicy::Rename {
        let mut count = 1;
        while path.exists() {
            path = dir.join(format!("{stem} ({count}).md"));
            count += 1;
        }
        if count > 1 {
            log::warn!(
                "Duplicate detected. Saved as: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );
        }
    }

    fs::write(&path, content).map_err(IoError::Io)?;
    Ok(path)
}

/// Append a `<timestamp> - Saved: <path>` line to the run log.
pub fn append_run_log(log_path: &Path, saved: &Path, now: NaiveDateTime) -> Result<(), IoError> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(IoError::Io)?;
    writeln!(
        file,
        "{} - Saved: {}",
        now.format("%Y-%m-%dT%H:%M:%S%.6f"),
        saved.display()
    )
    .map_err(IoError::Io)
}

/// File holding the date of the last incremental run.
#[derive(Debug, Clone)]
pub struct LastRunMarker {
    path: PathBuf,
}

impl LastRunMarker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The recorded date, or `None` if nothing has been recorded yet.
    pub fn read(&self) -> Result<Option<NaiveDate>, IoError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(IoError::Io)?;
        let value = content.trim();
        NaiveDate::parse_from_str(value, LAST_RUN_FORMAT)
            .map(Some)
            .map_err(|_| IoError::InvalidLastRun {
                path: self.path.clone(),
                value: value.to_string(),
            })
    }

    pub fn write(&self, date: NaiveDate) -> Result<(), IoError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(IoError::Io)?;
        }
        fs::write(&self.path, date.format(LAST_RUN_FORMAT).to_string()).map_err(IoError::Io)
    }
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDir(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}
