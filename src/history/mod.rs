//! zsh history compaction.
//!
//! This module reads a zsh extended history file, keeps the most recent
//! record of every distinct command, and writes the result back in place.
//! Records missing the command field (including multiline commands that
//! lose it) are reported and dropped.

mod compactor;
mod error;
mod record;
mod store;

pub use compactor::{
    compact, ingest, load, save, write_records, CompactOptions, CompactionSummary,
    LoadedHistory, MalformedRecord,
};
pub use error::HistoryError;
pub use record::{
    format_record, parse_record, preview, split_records, ParsedRecord, COMMAND_FIELD,
    FIELD_DELIMITER, RECORD_SEPARATOR,
};
pub use store::HistoryStore;
