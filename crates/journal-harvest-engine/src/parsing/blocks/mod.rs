//! # Block Building
//!
//! Turns a journal's lines into a flat, ordered list of outline blocks.
//!
//! ## Modules
//!
//! - **`types`**: `Block` plus the two structural scans, `ancestor_of` and
//!   `descendants_of`
//! - **`builder`**: `BlockBuilder` state machine that consumes lines one at a time
//!
//! ## Key Invariants
//!
//! - Blocks are emitted in line order and never share lines
//! - Depth is only computed for bullet lines; continuation lines follow their block
//! - There are no parent pointers; hierarchy is recovered from depth and order

pub mod builder;
pub mod types;

pub use builder::{BlockBuilder, build_blocks};
pub use types::{Block, ancestor_of, descendants_of};
