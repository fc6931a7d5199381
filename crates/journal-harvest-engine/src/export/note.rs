use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use relative_path::RelativePathBuf;

use crate::parsing::tags::{ExportUnit, TagPattern};

use super::{ExportError, NoteTitle, Tag};

fn collapsed_regex() -> &'static Regex {
    static COLLAPSED: OnceLock<Regex> = OnceLock::new();
    COLLAPSED.get_or_init(|| {
        Regex::new(r"(?m)^collapsed::\s*(true|false)\s*$").expect("Invalid collapsed regex")
    })
}

fn image_regex() -> &'static Regex {
    static IMAGE: OnceLock<Regex> = OnceLock::new();
    IMAGE.get_or_init(|| {
        Regex::new(r#"(!\[.*?\]\()\.\./assets/([^)"']+)\)"#).expect("Invalid image regex")
    })
}

/// An export unit rendered as a standalone note, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNote {
    pub tag: Tag,
    /// Destination folder relative to the vault root.
    pub folder: RelativePathBuf,
    /// File name without the `.md` extension.
    pub stem: String,
    pub content: String,
}

/// Renders an export unit as a note with YAML frontmatter.
///
/// The tag key is read from the tag line with the same `pattern` that
/// selected it. Fails when no key can be read or its category has no folder.
pub fn render_note(
    unit: &ExportUnit,
    pattern: &TagPattern,
    journal_date: NaiveDate,
) -> Result<RenderedNote, ExportError> {
    let tag = Tag::parse_with(&unit.tag_line, pattern)?;
    let folder = tag
        .target_folder()
        .ok_or_else(|| ExportError::UnrecognizedTag(unit.tag_line.trim().to_string()))?;
    let title = NoteTitle::from_raw(&unit.title);

    let content = format!(
        "---\ntitle: \"{}\"\ndate: {}\ncategory: {}\ntags:\n  - \"{}\"\n---\n{}\n",
        escape_yaml(&title.title),
        journal_date.format("%Y-%m-%d"),
        tag.category(),
        tag.key(),
        unit.body.trim(),
    );
    let content = collapsed_regex().replace_all(&content, "");
    let content = rewrite_asset_links(&content);

    Ok(RenderedNote {
        tag,
        folder,
        stem: title.stem,
        content,
    })
}

/// Rewrites `![alt](../assets/x)` image links to the vault-relative `assets/x`.
pub fn rewrite_asset_links(text: &str) -> String {
    image_regex()
        .replace_all(text, |caps: &Captures<'_>| format!("{}assets/{})", &caps[1], &caps[2]))
        .into_owned()
}

fn escape_yaml(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
