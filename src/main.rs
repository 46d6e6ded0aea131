mod cli;
mod config;
mod error;
mod feed;
mod report;
mod triage;
mod types;

use crate::error::TriageError;
use crate::triage::TriageOptions;
use crate::types::config::TriageConfig;
use crate::types::scoring::PriorityLevel;
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config layers live next to the feed file; stdin falls back to the working directory.
fn config_root(input: &Path) -> PathBuf {
    if feed::is_stdin(input) {
        return PathBuf::from(".");
    }
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn resolve_now(args: &cli::ScoringArgs) -> NaiveDateTime {
    args.today
        .map(|date| date.and_time(NaiveTime::MIN))
        .unwrap_or_else(|| Local::now().naive_local())
}

fn to_priority(min: cli::MinPriority) -> PriorityLevel {
    match min {
        cli::MinPriority::Critical => PriorityLevel::Critical,
        cli::MinPriority::High => PriorityLevel::High,
        cli::MinPriority::Medium => PriorityLevel::Medium,
        cli::MinPriority::Low => PriorityLevel::Low,
    }
}

fn build_options(
    loaded: Option<&TriageConfig>,
    min_priority: Option<cli::MinPriority>,
    open_only: bool,
) -> TriageOptions {
    let defaults = TriageOptions::default();
    TriageOptions {
        title: loaded.map(TriageConfig::title).unwrap_or(defaults.title),
        min_priority: min_priority
            .map(to_priority)
            .or_else(|| loaded.and_then(TriageConfig::min_priority))
            .unwrap_or(defaults.min_priority),
        open_only: open_only || loaded.is_some_and(TriageConfig::open_only),
    }
}

fn load_report(
    scoring: &cli::ScoringArgs,
    min_priority: Option<cli::MinPriority>,
    open_only: bool,
) -> Result<(types::report::TriageReport, Option<TriageConfig>), TriageError> {
    let loaded = config::load_config(&config_root(&scoring.input))?;
    let items = feed::load_items(&scoring.input)?;
    let now = resolve_now(scoring);
    let options = build_options(loaded.as_ref(), min_priority, open_only);
    info!(items = items.len(), as_of = %now.date(), "triaging feed");
    Ok((triage::triage(&items, now, &options), loaded))
}

fn status_code(report: &types::report::TriageReport) -> i32 {
    if report.has_critical() {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, TriageError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Report(cmd) => {
            let (triage_report, loaded) =
                load_report(&cmd.scoring, cmd.filter.min_priority, cmd.filter.open_only)?;

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => loaded
                    .as_ref()
                    .and_then(TriageConfig::format)
                    .and_then(report::OutputFormat::from_config)
                    .unwrap_or(report::OutputFormat::Md),
            };
            let rendered = report::render(&triage_report, output_format)?;
            println!("{rendered}");

            Ok(status_code(&triage_report))
        }
        cli::Commands::Queue(cmd) => {
            let (triage_report, _) =
                load_report(&cmd.scoring, cmd.filter.min_priority, cmd.filter.open_only)?;

            if triage_report.queue.is_empty() {
                println!("queue: no items");
                return Ok(status_code(&triage_report));
            }

            for entry in &triage_report.queue {
                let days = entry
                    .days_until_expiry
                    .map(|days| format!("{days} days"))
                    .unwrap_or_else(|| "unknown expiry".to_string());
                println!(
                    "[{}] {} ({}, {}) - {} - score {} - {}",
                    entry.priority.as_str(),
                    entry.item.name,
                    entry.item.category.label(),
                    entry.item.condition.label(),
                    days,
                    entry.quality_score,
                    entry.recommended_action
                );
            }

            Ok(status_code(&triage_report))
        }
        cli::Commands::Insights(cmd) => {
            let (triage_report, _) = load_report(&cmd.scoring, None, cmd.open_only)?;

            println!("items: {}", triage_report.insights.total());
            println!("critical: {}", triage_report.insights.critical);
            println!("warning: {}", triage_report.insights.warning);
            println!("good: {}", triage_report.insights.good);

            if triage_report.advisories.is_empty() {
                println!("recommendations: none");
            } else {
                println!("recommendations:");
                for advisory in &triage_report.advisories {
                    println!("- {}", advisory.message);
                }
            }

            Ok(status_code(&triage_report))
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
