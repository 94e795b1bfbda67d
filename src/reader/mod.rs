//! CSV record reading.
//!
//! Every record is returned as raw strings, the header included. Ragged rows
//! are kept as they are; the checks decide what a short or long row means.
//!
//! Blank lines come back as empty records in their source position, so a
//! record's index always matches the line it started on when no cell spans
//! lines.

use std::fs::File;
use std::io::{Chain, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator};

use crate::checker::Row;
use crate::error::{BallotGuardError, Result};

/// Closes an unterminated final line so every record ends on `\n`.
const FINAL_NEWLINE: &[u8] = b"\n";

/// Streaming record source for one file.
pub struct RecordReader<R: Read> {
    inner: csv::Reader<Chain<R, &'static [u8]>>,
    record: StringRecord,
    path: PathBuf,
    /// Reader line after the last record.
    line: u64,
    blank_lines: u64,
    pending: Option<Row>,
    finished: bool,
}

impl RecordReader<File> {
    /// Open `path` for reading.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| BallotGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file, path))
    }
}

impl<R: Read> RecordReader<R> {
    /// Read records from `reader`. `path` only labels errors.
    pub fn from_reader(reader: R, path: &Path) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_reader(reader.chain(FINAL_NEWLINE));
        Self {
            inner,
            record: StringRecord::new(),
            path: path.to_path_buf(),
            line: 1,
            blank_lines: 0,
            pending: None,
            finished: false,
        }
    }

    /// Lines consumed since the previous record beyond those the record spans.
    fn skipped_lines(&mut self, spanned: u64) -> u64 {
        let line = self.inner.position().line();
        let skipped = (line - self.line).saturating_sub(spanned);
        self.line = line;
        skipped
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.blank_lines > 0 {
            self.blank_lines -= 1;
            return Some(Ok(Row::new()));
        }
        if let Some(row) = self.pending.take() {
            return Some(Ok(row));
        }
        if self.finished {
            return None;
        }

        match self.inner.read_record(&mut self.record) {
            Ok(true) => {
                let breaks: usize = self.record.iter().map(|cell| cell.matches('\n').count()).sum();
                self.blank_lines = self.skipped_lines(breaks as u64 + 1);
                self.pending = Some(to_row(&self.record));
                self.next()
            }
            Ok(false) => {
                self.finished = true;
                self.blank_lines = self.skipped_lines(FINAL_NEWLINE.len() as u64);
                self.next()
            }
            Err(source) => {
                self.finished = true;
                Some(Err(BallotGuardError::Csv {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

/// Converts a record, dropping the `\r` a CRLF line leaves on its last cell.
fn to_row(record: &StringRecord) -> Row {
    if record.len() == 1 && record.as_slice() == "\r" {
        return Row::new();
    }
    let mut row: Row = record.iter().map(str::to_string).collect();
    if let Some(last) = row.last_mut()
        && last.ends_with('\r')
    {
        last.pop();
    }
    row
}

/// Read every record from an in-memory source.
#[cfg(test)]
pub(crate) fn records_from_reader<R: Read>(reader: R) -> Result<Vec<Row>> {
    RecordReader::from_reader(reader, Path::new("<memory>")).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
