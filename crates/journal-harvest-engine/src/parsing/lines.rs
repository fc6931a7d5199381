//! Line-level facts used by the block builder.
//!
//! Each line is looked at in isolation: its indentation depth, whether it
//! opens a block (`- ` bullet), and whether it is a `collapsed::` directive
//! that must be dropped before any structure is built.

/// Width of one indentation level, and the tab stop used when expanding tabs.
pub const INDENT_WIDTH: usize = 4;

const COLLAPSED_DIRECTIVE: &str = "collapsed::";

/// Returns the indentation depth of a line.
///
/// Leading whitespace is measured in columns with tabs expanded to the next
/// multiple of [`INDENT_WIDTH`], then divided by [`INDENT_WIDTH`] rounding down.
/// Mixed tabs and spaces never fail; they just land on some depth.
pub fn indent_depth(line: &str) -> usize {
    let mut column = 0usize;
    for ch in line.chars() {
        match ch {
            '\t' => column = (column / INDENT_WIDTH + 1) * INDENT_WIDTH,
            c if c.is_whitespace() => column += 1,
            _ => break,
        }
    }
    column / INDENT_WIDTH
}

/// Whether the line opens a block: `-` followed by at least one whitespace
/// character, after any leading whitespace.
pub fn is_block_start(line: &str) -> bool {
    line.trim_start()
        .strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Whether the line is an outliner `collapsed::` directive.
pub fn is_collapsed_directive(line: &str) -> bool {
    line.trim().starts_with(COLLAPSED_DIRECTIVE)
}

/// Whether `c` ends a line. Besides `\n` and `\r` this covers the vertical
/// tab, form feed, file/group/record separators, NEL and the Unicode line and
/// paragraph separators.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits text at every line break, treating `\r\n` as one break.
///
/// A trailing break does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Splits a journal into lines and drops `collapsed::` directives.
pub fn journal_lines(text: &str) -> Vec<&str> {
    split_lines(text)
        .into_iter()
        .filter(|line| !is_collapsed_directive(line))
        .collect()
}
