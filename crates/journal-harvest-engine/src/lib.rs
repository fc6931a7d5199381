pub mod export;
pub mod harvest;
pub mod io;
pub mod models;
pub mod organize;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use export::{ExportError, RenderedNote, Tag, render_note};
pub use harvest::{HarvestError, HarvestReport, HarvestSettings, Harvester};
pub use io::{CollisionPolicy, IoError, LastRunMarker};
pub use models::{DateWindow, JournalFile, RunMode};
pub use organize::{CategoryMap, OrganizeError, OrganizeReport, organize_inbox};
pub use parsing::{
    ParsedJournal,
    blocks::Block,
    parse_journal,
    tags::{ExportUnit, TagPattern},
};
