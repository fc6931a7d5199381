use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use journal_harvest_config::Config;
use journal_harvest_engine::{
    CategoryMap, HarvestSettings, Harvester, LastRunMarker, TagPattern, io, organize_inbox,
};
use std::{env, process};

mod args;

use args::{Cli, Commands, ExportArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    let config = match Config::resolve(&config_path, cli.vault.clone(), |key| env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_dir(&config.vault_path) {
        eprintln!(
            "Error: Vault path '{}' is invalid: {e}",
            config.vault_path.display()
        );
        process::exit(1);
    }

    match &cli.command {
        Commands::Export(export) => run_export(&config, export),
        Commands::Organize => run_organize(&config),
    }
}

fn run_export(config: &Config, export: &ExportArgs) -> Result<()> {
    let tag_pattern = match &config.tag_pattern {
        Some(pattern) => TagPattern::new(pattern)?,
        None => TagPattern::default(),
    };
    let mode = export.run_mode();
    log::debug!("Run mode: {mode:?}");

    let harvester = Harvester::new(HarvestSettings {
        vault_path: config.vault_path.clone(),
        journal_dir: config.journal_path(),
        run_log: Some(config.run_log_path()),
        last_run: LastRunMarker::new(config.last_run_path()),
        tag_pattern,
    });

    let report = harvester
        .run(mode, Local::now().naive_local())
        .context("Harvest failed")?;

    log::info!(
        "Done: {} journals, {} notes saved, {} skipped",
        report.journals,
        report.saved.len(),
        report.skipped.len()
    );
    Ok(())
}

fn run_organize(config: &Config) -> Result<()> {
    let inbox = config.inbox_path();
    let report = organize_inbox(&config.vault_path, &inbox, &CategoryMap::default())
        .with_context(|| format!("Failed to organize {}", inbox.display()))?;

    log::info!(
        "Done: {} moved, {} left in inbox, {} failed",
        report.moved.len(),
        report.skipped.len(),
        report.failed.len()
    );
    Ok(())
}
