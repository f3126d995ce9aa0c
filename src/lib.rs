//! histshrink - deduplicate zsh extended history files
//!
//! This library provides the pieces behind the `histshrink` binary:
//! - Record splitting and parsing for the `: <time>:<elapsed>;<command>` format
//! - An insertion-ordered store keeping the latest record per command
//! - The load -> save pipeline that rewrites a history file in place
//! - Command-line parsing and logging setup
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use histshrink::history::{compact, CompactOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let summary = compact(Path::new("/home/user/.zsh_history"), &CompactOptions::default())?;
//!     println!("kept {} of {} records", summary.kept, summary.records_read);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod history;
pub mod utils;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use history::{CompactOptions, CompactionSummary, HistoryError, HistoryStore};
