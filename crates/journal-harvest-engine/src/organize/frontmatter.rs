//! Reading the YAML frontmatter of exported notes.

use serde::Deserialize;
use std::path::Path;

const DELIMITER: &str = "---";

/// The frontmatter keys the organizer cares about.
///
/// Every other key is ignored, whatever its shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    pub category: Option<String>,
}

impl Frontmatter {
    /// Parses the `---` delimited block at the very top of `content`.
    ///
    /// Returns `None` when the first line is not a delimiter. A missing
    /// closing delimiter means everything after the opening one is YAML.
    pub fn parse(content: &str) -> Option<Result<Self, serde_yaml::Error>> {
        let content = content.trim_start_matches('\u{feff}');
        let mut lines = content.lines();
        if lines.next()?.trim() != DELIMITER {
            return None;
        }

        let yaml: Vec<&str> = lines.take_while(|line| line.trim() != DELIMITER).collect();
        let yaml = yaml.join("\n");
        if yaml.trim().is_empty() {
            return Some(Ok(Self::default()));
        }
        Some(serde_yaml::from_str(&yaml))
    }
}

/// The `category` of the note at `path`, if it has one.
///
/// Unreadable files and malformed frontmatter are logged and treated as
/// uncategorised.
pub fn read_category(path: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read {}: {e}", path.display());
            return None;
        }
    };

    match Frontmatter::parse(&content)? {
        Ok(frontmatter) => frontmatter.category,
        Err(e) => {
            log::warn!("Failed to extract category from {}: {e}", path.display());
            None
        }
    }
}
