use relative_path::RelativePathBuf;

use crate::parsing::tags::TagPattern;

use super::ExportError;

/// Category keywords and the vault folder each one files into.
const CATEGORY_FOLDERS: &[(&str, &str)] = &[
    ("project", "20. Projects"),
    ("get", "10. GCCS process/11. Get"),
    ("connect", "10. GCCS process/12. Connect"),
    ("create", "10. GCCS process/13. Create"),
    ("output", "60. Outputs"),
    ("ref", "80. References"),
    ("setting", "90. Settings"),
    ("inbox", "00. Inbox"),
];

/// The `#category` or `#category/sub` token of a tag line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    raw: String,
}

impl Tag {
    /// Extracts the tag key from a tag line using the default pattern.
    pub fn parse(tag_line: &str) -> Result<Self, ExportError> {
        Self::parse_with(tag_line, &TagPattern::default())
    }

    /// Extracts the tag key from a tag line matched by `pattern`.
    pub fn parse_with(tag_line: &str, pattern: &TagPattern) -> Result<Self, ExportError> {
        pattern
            .tag_key(tag_line)
            .map(|key| Self {
                raw: key.to_string(),
            })
            .ok_or_else(|| ExportError::InvalidTag(tag_line.trim().to_string()))
    }

    /// Lower-cased tag key as written to frontmatter, e.g. `get/ai`.
    pub fn key(&self) -> String {
        self.raw.to_lowercase()
    }

    /// Lower-cased first segment, e.g. `get`.
    pub fn category(&self) -> String {
        self.segments().0.to_lowercase()
    }

    /// Second segment with its original case, if any.
    pub fn project(&self) -> Option<&str> {
        self.segments().1
    }

    /// Vault folder the note belongs in, relative to the vault root.
    ///
    /// Returns `None` for categories without a folder.
    pub fn target_folder(&self) -> Option<RelativePathBuf> {
        let category = self.category();
        let (_, base) = CATEGORY_FOLDERS
            .iter()
            .find(|(keyword, _)| *keyword == category)?;
        let folder = RelativePathBuf::from(*base);
        Some(match self.project() {
            Some(project) => folder.join(project),
            None => folder,
        })
    }

    fn segments(&self) -> (&str, Option<&str>) {
        match self.raw.split_once('/') {
            Some((category, project)) => (category, Some(project)),
            None => (&self.raw, None),
        }
    }
}
