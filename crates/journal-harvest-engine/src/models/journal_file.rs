use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// File stem format of daily journal pages, e.g. `2025_03_14.md`.
pub const JOURNAL_STEM_FORMAT: &str = "%Y_%m_%d";

/// A daily journal page and the date its file name encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalFile {
    path: PathBuf,
    date: NaiveDate,
}

impl JournalFile {
    /// Returns `None` when the file stem is not a journal date.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let date = Self::parse_date(&path)?;
        Some(Self { path, date })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Display name (file name with extension)
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn parse_date(path: &Path) -> Option<NaiveDate> {
        let stem = path.file_stem()?.to_str()?;
        NaiveDate::parse_from_str(stem, JOURNAL_STEM_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_journal_path() {
        let file = JournalFile::from_path("/vault/journals/2025_03_14.md").unwrap();
        assert_eq!(file.date(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(file.name(), "2025_03_14.md");
    }

    #[test]
    fn test_non_journal_stems() {
        assert!(JournalFile::from_path("/vault/journals/contents.md").is_none());
        assert!(JournalFile::from_path("/vault/journals/2025-03-14.md").is_none());
        assert!(JournalFile::from_path("/vault/journals/2025_02_30.md").is_none());
    }
}
