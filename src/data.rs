// Hump Finder Index Builder
// Reads qualified names from a byte stream and builds the sorted simple-name index

use crate::types::IndexStats;
use rustc_hash::FxHashSet;
use std::io::{self, BufReader, Read};
use tracing::{debug, error};

/// Options for building a [`NameIndex`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Keep a final record that has no line terminator.
    ///
    /// Off by default: an unterminated tail is dropped.
    pub keep_unterminated_tail: bool,
}

/// Split a byte stream into trimmed records
///
/// A record ends at every `\n` and at every `\r`, so `\r\n` yields an extra
/// empty record. On a read error, reading stops and the records parsed so far
/// are returned together with the error.
pub fn read_records<R: Read>(
    reader: R,
    options: &BuildOptions,
) -> (Vec<String>, Option<io::Error>) {
    let mut records = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    let mut failure = None;

    for byte in BufReader::new(reader).bytes() {
        match byte {
            Ok(b'\n') | Ok(b'\r') => {
                records.push(finish_record(&buf));
                buf.clear();
            }
            Ok(b) => buf.push(b),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    if options.keep_unterminated_tail && failure.is_none() && !buf.is_empty() {
        records.push(finish_record(&buf));
    }

    (records, failure)
}

#[inline]
fn finish_record(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).trim().to_string()
}

/// Simple name of a qualified name: the text after the last `.`, or the whole string
///
/// # Examples
/// ```
/// # use hump_finder::data::simple_name;
/// assert_eq!(simple_name("java.awt.event.ActionEvent"), "ActionEvent");
/// assert_eq!(simple_name("FioBarBaz"), "FioBarBaz");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(dot) => &qualified[dot + 1..],
        None => qualified,
    }
}

/// Sorted, immutable collection of simple names
///
/// Duplicates are kept: distinct classes may share a simple name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    names: Vec<String>,
}

impl NameIndex {
    /// Build an index from a byte stream
    ///
    /// A read failure is logged and truncates the index to what was read
    /// before it. The reader is dropped (closed) once reading ends.
    pub fn from_reader<R: Read>(reader: R, options: &BuildOptions) -> Self {
        let (records, failure) = read_records(reader, options);

        if let Some(e) = failure {
            error!(
                error = %e,
                parsed = records.len(),
                "can't read qualified names anymore, keeping partial index"
            );
        }

        Self::from_records(records)
    }

    /// Build an index from already split qualified names
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = records
            .into_iter()
            .map(|record| simple_name(record.as_ref()).to_string())
            .collect();
        names.sort();

        debug!(entries = names.len(), "name index built");

        Self { names }
    }

    /// All names in ascending order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entry counts
    pub fn stats(&self) -> IndexStats {
        let distinct: FxHashSet<&str> = self.names.iter().map(String::as_str).collect();
        IndexStats {
            total: self.names.len(),
            distinct: distinct.len(),
        }
    }
}
