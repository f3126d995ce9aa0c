//! Record splitting and parsing for zsh extended history.
//!
//! An extended history file looks like this:
//!
//! ```text
//! : 1700000000:0;ls -la
//! : 1700000004:0;cd /tmp
//! ```
//!
//! Every record starts at a line beginning with `:`. Fields are split on
//! `;`: the metadata (timestamp and elapsed seconds) is field 0 and the
//! command text is field 1. Anything after a further `;` stays in the
//! record but is not part of the key.

/// Token that opens every record at the start of a line.
pub const RECORD_SEPARATOR: char = ':';

/// Delimiter between record fields.
pub const FIELD_DELIMITER: char = ';';

/// Field position holding the command text.
pub const COMMAND_FIELD: usize = 1;

/// Number of characters shown when reporting a malformed record.
const PREVIEW_CHARS: usize = 50;

/// Outcome of parsing a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedRecord<'a> {
    /// A well-formed record keyed by its command text.
    Entry { command: &'a str, record: &'a str },
    /// A record without the command field.
    Malformed(&'a str),
}

/// Parse one record (separator already stripped) into its command text.
///
/// The key is the second `;`-delimited field only, so `cd x; ls` and
/// `cd x; pwd` share the key `cd x` and the later record wins.
pub fn parse_record(record: &str) -> ParsedRecord<'_> {
    match record.split(FIELD_DELIMITER).nth(COMMAND_FIELD) {
        Some(command) => ParsedRecord::Entry { command, record },
        None => ParsedRecord::Malformed(record),
    }
}

/// Split raw history content into records with the leading separator removed.
///
/// Text before the first line starting with `:` is discarded. Trailing
/// newlines are stripped from each record.
pub fn split_records(content: &str) -> impl Iterator<Item = &str> {
    let mut chunks = content.split("\n:");
    let head = chunks
        .next()
        .and_then(|first| first.strip_prefix(RECORD_SEPARATOR));

    head.into_iter()
        .chain(chunks)
        .map(|chunk| chunk.trim_end_matches(['\n', '\r']))
}

/// Render a record back into its on-disk line, separator and newline included.
pub fn format_record(record: &str) -> String {
    format!("{RECORD_SEPARATOR}{record}\n")
}

/// Short single-line preview of a record for diagnostics.
pub fn preview(record: &str) -> String {
    let mut chars = record.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    let head = head.replace('\n', "\\n");
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
