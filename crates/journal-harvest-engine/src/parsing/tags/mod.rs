//! # Tag Extraction
//!
//! Finds blocks carrying a tag line (`#word` or `#word/word` alone on a line)
//! and reassembles each one with its title block and descendants into an
//! [`ExportUnit`].

pub mod extract;

use std::sync::OnceLock;

use regex::Regex;

pub use extract::{ExportUnit, Extraction, extract_units, tagged_blocks};

/// Default tag line pattern: optional bullet dash, then `#word` or
/// `#word/word`, and nothing else.
pub const DEFAULT_TAG_PATTERN: &str = r"-?\s*#\w+(?:/\w+)?\s*";

/// Capture group a custom pattern can use to name the tag key itself.
pub const TAG_KEY_GROUP: &str = "tag";

fn tag_token_regex() -> &'static Regex {
    static TAG_TOKEN: OnceLock<Regex> = OnceLock::new();
    TAG_TOKEN.get_or_init(|| Regex::new(r"#(\w+(?:/\w+)?)").expect("Invalid tag token regex"))
}

#[derive(Debug, thiserror::Error)]
pub enum TagPatternError {
    #[error("Invalid tag pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        source: regex::Error,
    },
}

/// A compiled tag line pattern.
///
/// The pattern must match the whole trimmed line, so it is anchored at both
/// ends when compiled. A pattern with a `(?P<tag>...)` group names the tag
/// key directly; without one, the key is the first `#word` or `#word/word`
/// token on the line.
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    pub fn new(pattern: &str) -> Result<Self, TagPatternError> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            TagPatternError::Invalid {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self { regex })
    }

    /// Whether `line`, once trimmed, is a tag line.
    pub fn is_tag_line(&self, line: &str) -> bool {
        self.regex.is_match(line.trim())
    }

    /// The tag key of a tag line, without the `#`, e.g. `get/ai`.
    pub fn tag_key<'a>(&self, line: &'a str) -> Option<&'a str> {
        let line = line.trim();
        if let Some(key) = self
            .regex
            .captures(line)
            .and_then(|caps| caps.name(TAG_KEY_GROUP))
        {
            return Some(key.as_str());
        }
        tag_token_regex()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// The first tag line in `lines`, if any.
    pub fn first_tag_line<'a>(&self, lines: &[&'a str]) -> Option<&'a str> {
        lines.iter().copied().find(|line| self.is_tag_line(line))
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        static DEFAULT: OnceLock<TagPattern> = OnceLock::new();
        DEFAULT
            .get_or_init(|| TagPattern::new(DEFAULT_TAG_PATTERN).expect("Invalid tag regex"))
            .clone()
    }
}
