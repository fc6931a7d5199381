pub mod blocks;
pub mod lines;
pub mod tags;

#[cfg(test)]
mod tests;

use blocks::{Block, build_blocks};
use lines::journal_lines;
use tags::{ExportUnit, TagPattern, extract_units};

#[derive(Debug)]
pub struct ParsedJournal<'a> {
    pub blocks: Vec<Block<'a>>,
    pub units: Vec<ExportUnit>,
}

/// Parses a journal's text into blocks and the export units they yield.
///
/// Pure: no I/O, no errors. A journal without bullets or tags simply yields
/// nothing.
pub fn parse_journal<'a>(text: &'a str, pattern: &TagPattern) -> ParsedJournal<'a> {
    let lines = journal_lines(text);
    let blocks = build_blocks(&lines);
    let units = extract_units(&blocks, pattern).units;
    ParsedJournal { blocks, units }
}
