use std::collections::BTreeSet;

use crate::parsing::blocks::{Block, ancestor_of, descendants_of};

use super::TagPattern;

/// One tagged block reassembled for export.
///
/// All three fields are raw journal text; trimming is left to the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportUnit {
    /// First line of the title block (the ancestor, or the tagged block itself).
    pub title: String,
    /// The first tag line found in the tagged block.
    pub tag_line: String,
    /// Title block body followed by every descendant body, newline joined.
    pub body: String,
}

/// Result of running tag extraction over one journal.
#[derive(Debug, Default)]
pub struct Extraction {
    /// One unit per tagged block, in block order.
    pub units: Vec<ExportUnit>,
    /// Every block index pulled into some unit. Overlaps are allowed and
    /// nothing is suppressed because of it.
    pub collected: BTreeSet<usize>,
}

/// Indices of blocks containing a tag line, paired with the first such line.
pub fn tagged_blocks<'a>(blocks: &[Block<'a>], pattern: &TagPattern) -> Vec<(usize, &'a str)> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(idx, block)| pattern.first_tag_line(&block.body).map(|tag| (idx, tag)))
        .collect()
}

/// Builds an [`ExportUnit`] for every tagged block.
///
/// The title block is the nearest shallower block before the tagged one, or
/// the tagged block itself when there is none. Descendants are the run of
/// strictly deeper blocks directly after the tagged block. Units may share
/// blocks; each tagged block is exported independently.
pub fn extract_units(blocks: &[Block<'_>], pattern: &TagPattern) -> Extraction {
    let mut extraction = Extraction::default();

    for (tag_idx, tag_line) in tagged_blocks(blocks, pattern) {
        let ancestor = ancestor_of(blocks, tag_idx);
        let descendants = descendants_of(blocks, tag_idx);

        extraction.collected.insert(tag_idx);
        extraction.collected.extend(ancestor);
        extraction.collected.extend(descendants.clone());

        let head = &blocks[ancestor.unwrap_or(tag_idx)];
        let lines: Vec<&str> = head
            .body
            .iter()
            .chain(blocks[descendants].iter().flat_map(|b| b.body.iter()))
            .copied()
            .collect();

        extraction.units.push(ExportUnit {
            title: head.first_line().to_string(),
            tag_line: tag_line.to_string(),
            body: lines.join("\n"),
        });
    }

    log::debug!(
        "Collected {} of {} blocks into {} units: {:?}",
        extraction.collected.len(),
        blocks.len(),
        extraction.units.len(),
        extraction.collected
    );

    extraction
}
