pub mod journal_file;
pub mod run_mode;

pub use journal_file::JournalFile;
pub use run_mode::{DateWindow, RunMode};
