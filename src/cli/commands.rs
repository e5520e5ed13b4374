//! Command implementations for the playerkit CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and summary output for the CLI interface.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use crate::app::models::Player;
use crate::app::services::player_factory::PlayerFactory;
use crate::app::services::rater_parser::stat_mapper::{LabelRule, Scope, STAT_TABLE};
use crate::cli::args::{Args, Commands, OutputFormat, ProcessArgs};
use crate::config::Config;

/// Processing statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of input files processed
    pub files_processed: usize,
    /// Number of player records extracted
    pub players_extracted: usize,
    /// Number of extracted players on waivers
    pub free_agents: usize,
    /// Number of files skipped due to errors
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Main command runner for playerkit
pub fn run(args: Args) -> anyhow::Result<ProcessingStats> {
    match args.get_command() {
        Commands::Process(process_args) => run_process(&process_args),
        Commands::Categories => {
            run_categories();
            Ok(ProcessingStats::default())
        }
    }
}

/// Execute the process command: read pages, extract records, write JSON
fn run_process(args: &ProcessArgs) -> anyhow::Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level());
    info!("starting playerkit");
    debug!("command line arguments: {:?}", args);

    args.validate()?;

    let config = match &args.config_file {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.validate()?;

    let files = collect_input_files(&args.input_path)?;
    if files.is_empty() {
        bail!(
            "no .html input files found under {}",
            args.input_path.display()
        );
    }
    info!("found {} input file(s)", files.len());

    let progress = if args.show_progress() && files.len() > 1 {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )
            .expect("valid progress template")
            .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let mut stats = ProcessingStats::default();
    let mut players: Vec<Player> = Vec::new();

    for file in &files {
        if let Some(bar) = &progress {
            bar.set_message(
                file.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
        }

        let markup = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        match PlayerFactory::create_players_with_config(
            &args.source,
            &markup,
            args.mode,
            config.clone(),
        ) {
            Ok(extracted) => {
                debug!("{}: {} players", file.display(), extracted.len());
                stats.players_extracted += extracted.len();
                stats.files_processed += 1;
                players.extend(extracted);
            }
            Err(e) if args.keep_going => {
                warn!("skipping {}: {}", file.display(), e);
                stats.errors_encountered += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to parse {}", file.display()));
            }
        }

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    stats.free_agents = players.iter().filter(|p| p.is_free_agent()).count();

    write_players(&players, args)?;

    stats.processing_time = start_time.elapsed();
    print_summary(&stats, args);

    Ok(stats)
}

/// List the canonical stat vocabulary from the category table
fn run_categories() {
    println!("{}", "Canonical stat categories".bold());
    for mapping in STAT_TABLE {
        let scope = match mapping.scope {
            Scope::Hitter => "hitter",
            Scope::Pitcher => "pitcher",
            Scope::Any => "any",
        };
        let label = match mapping.rule {
            LabelRule::Exact(text) => text.to_string(),
            LabelRule::Contains(needle) => format!("label containing \"{}\"", needle),
            LabelRule::ContainsCi(needle) => {
                format!("label containing \"{}\" (any case)", needle)
            }
        };
        println!("  {:<6} {:<8} {}", mapping.code, scope, label);
    }
}

/// Set up tracing with the requested verbosity
fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Collect input files: a single file, or every .html/.htm under a directory
fn collect_input_files(input_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if input_path.is_file() {
        return Ok(vec![input_path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input_path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        })
        .collect();

    files.sort();
    Ok(files)
}

/// Write extracted records as JSON to the output file or stdout
fn write_players(players: &[Player], args: &ProcessArgs) -> anyhow::Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(players)?
    } else {
        serde_json::to_string(players)?
    };

    match &args.output_path {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {} records to {}", players.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Print the run summary to stderr, leaving stdout for record data
fn print_summary(stats: &ProcessingStats, args: &ProcessArgs) {
    match args.output_format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "files_processed": stats.files_processed,
                "players_extracted": stats.players_extracted,
                "free_agents": stats.free_agents,
                "errors_encountered": stats.errors_encountered,
                "elapsed_ms": stats.processing_time.as_millis() as u64,
            });
            eprintln!("{}", summary);
        }
        OutputFormat::Human => {
            if args.quiet {
                return;
            }
            eprintln!();
            eprintln!("{}", "Extraction complete".green().bold());
            eprintln!("  Files processed:   {}", stats.files_processed);
            eprintln!("  Players extracted: {}", stats.players_extracted);
            eprintln!("  Free agents:       {}", stats.free_agents);
            if stats.errors_encountered > 0 {
                eprintln!(
                    "  {}     {}",
                    "Files skipped:".yellow(),
                    stats.errors_encountered
                );
            }
            eprintln!("  Elapsed:           {}", HumanDuration(stats.processing_time));
        }
    }
}
