//! CSV recording reader
//!
//! Parses a columnar recording file: a header row of integer channel
//! indices followed by one row of integer values per recorded time step.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading a recording file.
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("failed to read recording file: {0}")]
    Io(#[from] std::io::Error),
    #[error("recording has no header row")]
    MissingHeader,
    #[error("invalid channel index in header: {0:?}")]
    InvalidHeader(String),
}

/// One parsed column: a channel index and its value series over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingColumn {
    /// Channel index as written in the header (range is not enforced here)
    pub channel: u16,
    /// One value per recorded time step, in file order
    pub values: Vec<u8>,
}

/// Split a line into numeric tokens. Values may be separated by commas,
/// whitespace, or any mix of the two.
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// Read a recording file into per-channel value series.
///
/// All returned columns have the same length: a data row whose token count
/// does not match the header, or that contains a token outside 0..=255, is
/// skipped whole so that column lengths never diverge. An unreadable file or
/// an unparsable header fails the read.
///
/// Column order preserves header order; row order preserves file order.
pub fn read_recording(path: &Path) -> Result<Vec<RecordingColumn>, CsvError> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = lines.next().ok_or(CsvError::MissingHeader)??;
    let mut columns: Vec<RecordingColumn> = Vec::new();
    for token in tokens(&header) {
        let channel = token
            .parse::<u16>()
            .map_err(|_| CsvError::InvalidHeader(token.to_string()))?;
        columns.push(RecordingColumn {
            channel,
            values: Vec::new(),
        });
    }

    for (line_number, line) in lines.enumerate() {
        let line = line?;
        let row: Option<Vec<u8>> = tokens(&line).map(|t| t.parse::<u8>().ok()).collect();
        match row {
            Some(values) if values.len() == columns.len() && !values.is_empty() => {
                for (column, value) in columns.iter_mut().zip(values) {
                    column.values.push(value);
                }
            }
            // Blank lines carry no time step
            Some(values) if values.is_empty() => {}
            _ => {
                log::warn!("skipping malformed row {} in {:?}", line_number + 2, path);
            }
        }
    }

    Ok(columns)
}
