//! The load -> save compaction pipeline.
//!
//! The history file is read in full, deduplicated in memory, and written
//! back over the same path. The rewrite truncates the file first; a failure
//! halfway through the write can leave it partially written.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::HistoryError;
use super::record::{format_record, parse_record, preview, split_records, ParsedRecord};
use super::store::HistoryStore;

/// A record dropped because it has no command field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedRecord {
    /// Position of the record in the file, counting from zero.
    pub index: usize,
    pub text: String,
}

/// Result of the read pass.
#[derive(Debug, Default)]
pub struct LoadedHistory {
    pub store: HistoryStore,
    pub malformed: Vec<MalformedRecord>,
    /// Records found in the file, malformed ones included.
    pub records_read: usize,
}

impl LoadedHistory {
    /// Records that collapsed into a later occurrence of the same command.
    pub fn duplicates(&self) -> usize {
        self.records_read - self.malformed.len() - self.store.len()
    }
}

/// Options for a single compaction run.
#[derive(Clone, Debug, Default)]
pub struct CompactOptions {
    /// Load and report without rewriting the file.
    pub dry_run: bool,
}

/// What a compaction run did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompactionSummary {
    pub path: PathBuf,
    pub records_read: usize,
    pub kept: usize,
    pub duplicates_removed: usize,
    pub malformed: usize,
    pub written: bool,
}

impl CompactionSummary {
    fn new(path: &Path, loaded: &LoadedHistory, written: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            records_read: loaded.records_read,
            kept: loaded.store.len(),
            duplicates_removed: loaded.duplicates(),
            malformed: loaded.malformed.len(),
            written,
        }
    }
}

/// Build the deduplicated store from raw history content.
pub fn ingest(content: &str) -> LoadedHistory {
    let mut loaded = LoadedHistory::default();

    for (index, raw) in split_records(content).enumerate() {
        loaded.records_read += 1;
        match parse_record(raw) {
            ParsedRecord::Entry { command, record } => {
                if loaded.store.insert(command, record).is_some() {
                    debug!(index, command, "Replaced earlier occurrence");
                }
            }
            ParsedRecord::Malformed(text) => {
                warn!(index, "Dropping malformed record: {}", preview(text));
                loaded.malformed.push(MalformedRecord {
                    index,
                    text: text.to_string(),
                });
            }
        }
    }

    loaded
}

/// Read and deduplicate the history file at `path`.
pub fn load(path: &Path) -> Result<LoadedHistory, HistoryError> {
    let content =
        fs::read_to_string(path).map_err(|e| HistoryError::read(path.to_path_buf(), e))?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    let loaded = ingest(&content);
    info!(
        "Loaded {} records from {} ({} unique, {} malformed)",
        loaded.records_read,
        path.display(),
        loaded.store.len(),
        loaded.malformed.len()
    );
    Ok(loaded)
}

/// Write every stored record to `writer`, one line each.
pub fn write_records<W: Write>(store: &HistoryStore, writer: &mut W) -> std::io::Result<usize> {
    let mut written = 0;
    for record in store.records() {
        writer.write_all(format_record(record).as_bytes())?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Overwrite the file at `path` with the contents of `store`.
///
/// Returns the number of records written.
pub fn save(path: &Path, store: &HistoryStore) -> Result<usize, HistoryError> {
    let write_err = |source: std::io::Error| HistoryError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    let written = write_records(store, &mut writer).map_err(write_err)?;

    info!("Wrote {} records to {}", written, path.display());
    Ok(written)
}

/// Run one load -> save pass over `path`.
pub fn compact(path: &Path, options: &CompactOptions) -> Result<CompactionSummary, HistoryError> {
    let loaded = load(path)?;

    if options.dry_run {
        info!("Dry run, leaving {} untouched", path.display());
        return Ok(CompactionSummary::new(path, &loaded, false));
    }

    save(path, &loaded.store)?;
    Ok(CompactionSummary::new(path, &loaded, true))
}
