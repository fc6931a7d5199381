//! The export pipeline: journals in, category notes out.

use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;

use crate::export::render_note;
use crate::io::{self, IoError, LastRunMarker};
use crate::models::{JournalFile, RunMode};
use crate::parsing::{parse_journal, tags::TagPattern};

#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("Failed to read journal {path}: {source}")]
    Journal { path: PathBuf, source: IoError },
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Where a harvest reads from and writes to.
#[derive(Debug, Clone)]
pub struct HarvestSettings {
    /// Root of the notes vault; category folders are created beneath it.
    pub vault_path: PathBuf,
    /// Folder holding the daily journal pages.
    pub journal_dir: PathBuf,
    /// Run log to append saved paths to, if any.
    pub run_log: Option<PathBuf>,
    pub last_run: LastRunMarker,
    pub tag_pattern: TagPattern,
}

#[derive(Debug, Default)]
pub struct HarvestReport {
    /// Journals picked up by the date window.
    pub journals: usize,
    /// Notes written, in the order they were written.
    pub saved: Vec<PathBuf>,
    /// Units that could not be exported, with the reason.
    pub skipped: Vec<String>,
    /// Date recorded in the last-run marker, if it was updated.
    pub recorded: Option<NaiveDate>,
}

pub struct Harvester {
    settings: HarvestSettings,
}

impl Harvester {
    pub fn new(settings: HarvestSettings) -> Self {
        Self { settings }
    }

    /// Runs one harvest as of `now`.
    ///
    /// Journals are processed one at a time in date order. A unit whose tag
    /// has no folder is skipped with a warning; any I/O failure stops the run.
    pub fn run(&self, mode: RunMode, now: NaiveDateTime) -> Result<HarvestReport, HarvestError> {
        let last_run = match mode {
            RunMode::Incremental => self.settings.last_run.read()?,
            RunMode::Debug | RunMode::Date(_) => None,
        };
        let window = mode.window(last_run, now);
        log::debug!("Harvest window: {} .. {}", window.start, window.end);

        let journals = io::scan_journal_files(&self.settings.journal_dir, &window)?;
        let mut report = HarvestReport {
            journals: journals.len(),
            ..HarvestReport::default()
        };

        if journals.is_empty() {
            log::warn!("No recent journal files to process.");
        } else {
            log::info!("Found {} journal files to process.", journals.len());
        }

        for journal in &journals {
            self.harvest_journal(journal, mode, now, &mut report)?;
        }

        if mode.records_last_run() {
            let today = now.date();
            log::info!("Updating last run date to: {today}");
            match self.settings.last_run.write(today) {
                Ok(()) => report.recorded = Some(today),
                Err(e) => log::error!("Failed to write last run file: {e}"),
            }
        }

        Ok(report)
    }

    fn harvest_journal(
        &self,
        journal: &JournalFile,
        mode: RunMode,
        now: NaiveDateTime,
        report: &mut HarvestReport,
    ) -> Result<(), HarvestError> {
        log::info!("Processing file: {}", journal.name());
        let text = io::read_file(journal.path()).map_err(|source| HarvestError::Journal {
            path: journal.path().to_path_buf(),
            source,
        })?;

        let parsed = parse_journal(&text, &self.settings.tag_pattern);
        for unit in &parsed.units {
            log::info!("[TITLE] {}", unit.title.trim());
            log::info!("[TAG]   {}", unit.tag_line.trim());

            let note = match render_note(unit, &self.settings.tag_pattern, journal.date()) {
                Ok(note) => note,
                Err(e) => {
                    log::warn!("{e}");
                    report.skipped.push(e.to_string());
                    continue;
                }
            };

            let dir = note.folder.to_path(&self.settings.vault_path);
            let saved = io::write_note(&dir, &note.stem, &note.content, mode.collision_policy())?;
            log::info!("Saved: {}", saved.display());

            if let Some(run_log) = &self.settings.run_log {
                io::append_run_log(run_log, &saved, now)?;
            }
            report.saved.push(saved);
        }

        Ok(())
    }
}
