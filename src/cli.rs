use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Expiry triage and distribution priority for donated food items"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full triage report: insights, priority queue and recommendations
    Report(ReportCommand),
    /// Priority queue only, one line per item
    Queue(QueueCommand),
    /// Quality counts and recommendations only
    Insights(InsightsCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MinPriority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoringArgs {
    /// Feed file from the item listing endpoint, or `-` for stdin
    pub input: PathBuf,
    /// Score as of this date (YYYY-MM-DD) instead of the local clock
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}

#[derive(Args)]
pub struct FilterArgs {
    #[arg(long, value_enum)]
    pub min_priority: Option<MinPriority>,
    /// Skip items already redistributed or discarded
    #[arg(long)]
    pub open_only: bool,
}

#[derive(Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub scoring: ScoringArgs,
    #[command(flatten)]
    pub filter: FilterArgs,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct QueueCommand {
    #[command(flatten)]
    pub scoring: ScoringArgs,
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct InsightsCommand {
    #[command(flatten)]
    pub scoring: ScoringArgs,
    #[arg(long)]
    pub open_only: bool,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD ({e})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date("2024-05-01").ok(),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn parse_date_rejects_other_shapes() {
        assert!(parse_date("05/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn cli_parses_report_flags() {
        let cli = Cli::try_parse_from([
            "triage",
            "report",
            "items.json",
            "--today",
            "2024-05-01",
            "--format",
            "json",
            "--min-priority",
            "high",
            "--open-only",
        ])
        .expect("arguments should parse");

        match cli.command {
            Commands::Report(cmd) => {
                assert_eq!(cmd.scoring.input, PathBuf::from("items.json"));
                assert_eq!(cmd.scoring.today, NaiveDate::from_ymd_opt(2024, 5, 1));
                assert!(matches!(cmd.format, Some(ReportFormat::Json)));
                assert!(matches!(cmd.filter.min_priority, Some(MinPriority::High)));
                assert!(cmd.filter.open_only);
            }
            _ => panic!("expected report command"),
        }
    }
}
