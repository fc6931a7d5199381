use std::sync::OnceLock;

use regex::Regex;

/// File stem used when nothing usable is left of a title.
pub const UNTITLED: &str = "untitled";

struct TitlePatterns {
    journal_prefix: Regex,
    leading_symbols: Regex,
    forbidden: Regex,
    underscores: Regex,
    leading_dashes: Regex,
}

fn patterns() -> &'static TitlePatterns {
    static PATTERNS: OnceLock<TitlePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TitlePatterns {
        journal_prefix: Regex::new(r"^\d{4}[_-]\d{2}[_-]\d{2}[_-]\s*#\S+\s*")
            .expect("Invalid journal prefix regex"),
        leading_symbols: Regex::new(r"^[\W_]+").expect("Invalid leading symbol regex"),
        forbidden: Regex::new(r#"[\\/*?:"<>|]"#).expect("Invalid filename regex"),
        underscores: Regex::new(r"__+").expect("Invalid underscore regex"),
        leading_dashes: Regex::new(r"^-+\s*").expect("Invalid dash regex"),
    })
}

/// A cleaned note title and the file stem derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTitle {
    /// Title as written to frontmatter.
    pub title: String,
    /// File name without the `.md` extension.
    pub stem: String,
}

impl NoteTitle {
    /// Cleans a raw title line such as `2025_01_02_ #get Some idea`.
    ///
    /// Drops a leading `date #tag` prefix and any leading bullet or symbol
    /// characters, then strips characters that are not allowed in file names.
    pub fn from_raw(raw: &str) -> Self {
        let p = patterns();

        let title = p.journal_prefix.replace(raw.trim(), "");
        let title = p.leading_symbols.replace(title.trim(), "").into_owned();

        let stem = p.forbidden.replace_all(&title, "");
        let stem = p.underscores.replace_all(stem.trim(), "_").into_owned();
        let stem = if stem.is_empty() {
            UNTITLED.to_string()
        } else {
            stem
        };

        let title = p.leading_dashes.replace(&title, "").trim().to_string();

        Self { title, stem }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- Reading notes", "Reading notes", "Reading notes")]
    #[case("\t- **Bold** title", "Bold** title", "Bold title")]
    #[case("2025_01_02_ #get Idea", "Idea", "Idea")]
    #[case("- 2025_01_02_ #get Idea", "2025_01_02_ #get Idea", "2025_01_02_ #get Idea")]
    #[case("2025-01-02- #ref/books Dune", "Dune", "Dune")]
    #[case("- What? Why: \"this\"", "What? Why: \"this\"", "What Why this")]
    #[case("- a/b\\c|d", "a/b\\c|d", "abcd")]
    #[case("- snake__case___name", "snake__case___name", "snake_case_name")]
    #[case("- [[Linked page]]", "Linked page]]", "Linked page]]")]
    fn test_from_raw(#[case] raw: &str, #[case] title: &str, #[case] stem: &str) {
        let cleaned = NoteTitle::from_raw(raw);
        assert_eq!(cleaned.title, title);
        assert_eq!(cleaned.stem, stem);
    }

    #[test]
    fn test_empty_stem_falls_back() {
        let cleaned = NoteTitle::from_raw("- ???");
        assert_eq!(cleaned.title, "");
        assert_eq!(cleaned.stem, UNTITLED);
    }

    #[test]
    fn test_stem_only_symbols_left() {
        let cleaned = NoteTitle::from_raw("- ok: ???");
        assert_eq!(cleaned.stem, "ok");
    }
}
