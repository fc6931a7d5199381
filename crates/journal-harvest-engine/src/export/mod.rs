//! # Note Export
//!
//! Turns [`ExportUnit`](crate::parsing::tags::ExportUnit)s into standalone notes:
//!
//! - **`tag`**: tag token parsing and the category to vault folder mapping
//! - **`title`**: title cleanup and file stem derivation
//! - **`note`**: frontmatter rendering and asset link rewriting

pub mod note;
pub mod tag;
pub mod title;

pub use note::{RenderedNote, render_note, rewrite_asset_links};
pub use tag::Tag;
pub use title::NoteTitle;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Could not extract a valid tag from line: {0}")]
    InvalidTag(String),
    #[error("Unrecognized tag: {0}")]
    UnrecognizedTag(String),
}
