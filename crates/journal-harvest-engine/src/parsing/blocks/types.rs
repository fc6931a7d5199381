use std::ops::Range;

/// A bullet line plus every line beneath it up to the next bullet at the
/// same or a shallower depth.
///
/// Nesting is never stored; it is derived from `depth` and position with
/// [`ancestor_of`] and [`descendants_of`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Index of the bullet line among the journal's lines.
    pub start: usize,
    /// Indentation depth of the bullet line.
    pub depth: usize,
    /// The bullet line followed by its continuation and nested lines.
    pub body: Vec<&'a str>,
}

impl<'a> Block<'a> {
    /// The bullet line that opened this block.
    pub fn first_line(&self) -> &'a str {
        self.body[0]
    }

    /// Index one past the last line of the block.
    pub fn end(&self) -> usize {
        self.start + self.body.len()
    }
}

/// Nearest preceding block whose depth is strictly less than the block at `idx`.
pub fn ancestor_of(blocks: &[Block<'_>], idx: usize) -> Option<usize> {
    let depth = blocks[idx].depth;
    (0..idx).rev().find(|&j| blocks[j].depth < depth)
}

/// The contiguous run of blocks after `idx` that are strictly deeper than it.
///
/// The scan stops at the first block at the same or a shallower depth, so the
/// result is always a (possibly empty) range starting at `idx + 1`.
pub fn descendants_of(blocks: &[Block<'_>], idx: usize) -> Range<usize> {
    let depth = blocks[idx].depth;
    let first = idx + 1;
    let len = blocks[first..]
        .iter()
        .take_while(|b| b.depth > depth)
        .count();
    first..first + len
}
