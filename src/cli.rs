//! Command-line interface.
//!
//! Parses arguments, runs one compaction over the given file and renders
//! the summary for stdout.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, ValueEnum};

use crate::history::{compact, CompactOptions, CompactionSummary};

#[derive(Parser, Debug)]
#[command(author, version, about = "Process and deduplicate a zsh history file", long_about = None)]
pub struct Cli {
    /// Path to zsh history file
    pub history_file: PathBuf,

    /// Report what would change without rewriting the file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write a log file into this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn compact_options(&self) -> CompactOptions {
        CompactOptions {
            dry_run: self.dry_run,
        }
    }
}

/// Compact the file named on the command line.
pub fn run(cli: &Cli) -> Result<CompactionSummary> {
    tracing::debug!("Compacting {}", cli.history_file.display());
    let summary = compact(&cli.history_file, &cli.compact_options())?;
    Ok(summary)
}

/// Render a summary in the requested format.
pub fn render_summary(summary: &CompactionSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut line = format!(
                "{}: kept {} of {} records ({} duplicates, {} malformed dropped)",
                summary.path.display(),
                summary.kept,
                summary.records_read,
                summary.duplicates_removed,
                summary.malformed
            );
            if !summary.written {
                line.push_str(" [dry run]");
            }
            Ok(line)
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(summary).context("Failed to serialize summary")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(written: bool) -> CompactionSummary {
        CompactionSummary {
            path: PathBuf::from("/tmp/.zsh_history"),
            records_read: 5,
            kept: 3,
            duplicates_removed: 1,
            malformed: 1,
            written,
        }
    }

    #[test]
    fn test_parse_positional_only() -> Result<()> {
        let cli = Cli::try_parse_from(["histshrink", "/tmp/hist"])?;
        assert_eq!(cli.history_file, PathBuf::from("/tmp/hist"));
        assert!(!cli.dry_run);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 0);
        assert!(cli.log_dir.is_none());
        Ok(())
    }

    #[test]
    fn test_parse_all_flags() -> Result<()> {
        let cli = Cli::try_parse_from([
            "histshrink",
            "-n",
            "-vv",
            "--format",
            "json",
            "--log-dir",
            "/tmp/logs",
            "hist",
        ])?;
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(cli.compact_options().dry_run);
        Ok(())
    }

    #[test]
    fn test_missing_path_is_usage_error() {
        assert!(Cli::try_parse_from(["histshrink"]).is_err());
    }

    #[test]
    fn test_render_text() -> Result<()> {
        let text = render_summary(&summary(true), OutputFormat::Text)?;
        assert_eq!(
            text,
            "/tmp/.zsh_history: kept 3 of 5 records (1 duplicates, 1 malformed dropped)"
        );

        let dry = render_summary(&summary(false), OutputFormat::Text)?;
        assert!(dry.ends_with("[dry run]"));
        Ok(())
    }

    #[test]
    fn test_render_json() -> Result<()> {
        let json = render_summary(&summary(true), OutputFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value["kept"], 3);
        assert_eq!(value["records_read"], 5);
        assert_eq!(value["written"], true);
        assert_eq!(value["path"], "/tmp/.zsh_history");
        Ok(())
    }
}
