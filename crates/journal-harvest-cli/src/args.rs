//! Clap argument definitions for the `journal-harvest` CLI.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use journal_harvest_engine::RunMode;

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "journal-harvest")]
#[command(about = "Export tagged journal blocks into a notes vault")]
pub struct Cli {
    /// Config file to use instead of ~/.config/journal-harvest/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Vault root, overriding the config file and BASE_PATH
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export tagged blocks from recent journals
    Export(ExportArgs),
    /// Move inbox notes into their category folders
    Organize,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Process the last month without updating the last run date
    #[arg(long, conflicts_with = "date")]
    pub debug: bool,

    /// Process a single day (YYYY-MM-DD), overwriting existing notes
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

impl ExportArgs {
    pub fn run_mode(&self) -> RunMode {
        match (self.date, self.debug) {
            (Some(date), _) => RunMode::Date(date),
            (None, true) => RunMode::Debug,
            (None, false) => RunMode::Incremental,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD"))
}
