// src/cli/dispatch.rs
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::analysis::Engine;
use crate::cli::args::{CheckArgs, Commands, OutputFormat};
use crate::config::{self, Config};
use crate::discovery;
use crate::reporting::{console, json};
use crate::rules;

/// Runs a parsed command and returns the process exit code.
///
/// # Errors
/// Returns error on operational failures (bad config, I/O); findings are
/// communicated through the exit code, not the error channel.
pub fn execute(command: Option<Commands>) -> Result<i32> {
    match command {
        None => run_check(CheckArgs::default()),
        Some(Commands::Check { paths, format, verbose }) => {
            run_check(CheckArgs { paths, format, verbose })
        }
        Some(Commands::Rules) => run_rules(),
        Some(Commands::Init) => run_init(),
    }
}

fn run_check(args: CheckArgs) -> Result<i32> {
    let mut config = Config::load()?;
    config.verbose = args.verbose;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths
    };

    let files = discovery::discover(&roots, &config)?;
    if files.is_empty() {
        println!("No files to scan.");
        return Ok(0);
    }

    // Chatter goes to stderr so `--format json` keeps stdout as one document.
    if config.verbose {
        eprintln!("Scanning {} files...", files.len());
    }

    let engine = Engine::new(config);
    let report = engine.scan(&files);

    match args.format {
        OutputFormat::Terminal => console::print_report(&report),
        OutputFormat::Json => json::print_report(&report)?,
    }

    Ok(i32::from(report.has_errors()))
}

fn run_rules() -> Result<i32> {
    for rule in rules::registry() {
        println!(
            "{}  {:20} {:7}  {}",
            rule.id.yellow().bold(),
            rule.name,
            rule.severity.label(),
            rule.description.dimmed()
        );
    }
    Ok(0)
}

fn run_init() -> Result<i32> {
    if config::write_default(std::path::Path::new("."))? {
        println!("{} Wrote {}", "OK".green().bold(), config::CONFIG_FILE);
    } else {
        println!("{} already exists, leaving it untouched.", config::CONFIG_FILE);
    }
    Ok(0)
}
