use crate::parsing::lines::{indent_depth, is_block_start};

use super::types::Block;

#[derive(Debug, Clone)]
enum BuilderState<'a> {
    /// Before the first bullet line; text here belongs to no block.
    Preamble,
    Open {
        start: usize,
        depth: usize,
        body: Vec<&'a str>,
    },
}

/// Line-at-a-time state machine that turns journal lines into [`Block`]s.
///
/// A bullet line opens a block which then consumes every following line
/// until a bullet at the same or a shallower depth, which closes it and opens
/// the next block. Deeper bullets are consumed into the open block rather than
/// starting blocks of their own, so blocks never overlap.
pub struct BlockBuilder<'a> {
    state: BuilderState<'a>,
    next_line: usize,
    out: Vec<Block<'a>>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            state: BuilderState::Preamble,
            next_line: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &'a str) {
        let idx = self.next_line;
        self.next_line += 1;

        let opens = is_block_start(line);
        let closes = match &self.state {
            BuilderState::Open { depth, .. } => opens && indent_depth(line) <= *depth,
            BuilderState::Preamble => opens,
        };

        if closes {
            self.flush();
            self.open(idx, line);
        } else if let BuilderState::Open { body, .. } = &mut self.state {
            body.push(line);
        }
    }

    pub fn finish(mut self) -> Vec<Block<'a>> {
        // EOF flush
        self.flush();
        self.out
    }

    fn open(&mut self, start: usize, line: &'a str) {
        self.state = BuilderState::Open {
            start,
            depth: indent_depth(line),
            body: vec![line],
        };
    }

    fn flush(&mut self) {
        let prev = std::mem::replace(&mut self.state, BuilderState::Preamble);
        if let BuilderState::Open { start, depth, body } = prev {
            self.out.push(Block { start, depth, body });
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the flat block list for already-filtered journal lines.
pub fn build_blocks<'a>(lines: &[&'a str]) -> Vec<Block<'a>> {
    let mut builder = BlockBuilder::new();
    for &line in lines {
        builder.push(line);
    }
    builder.finish()
}
