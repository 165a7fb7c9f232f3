// SPDX-License-Identifier: MPL-2.0
//! CSV calendar source.
//!
//! The first row is the header; columns are matched by name (`day`, `time`,
//! `flags`, `description`, `value`, `importance`) in any order. Unknown
//! columns are ignored and short rows are accepted, their missing cells
//! reading as absent.

use crate::application::port::{CalendarSource, RawRow};
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(default)]
    day: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    flags: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    importance: Option<String>,
}

impl From<CsvRecord> for RawRow {
    fn from(record: CsvRecord) -> Self {
        RawRow {
            day: record.day,
            time: record.time,
            flags: record.flags,
            description: record.description,
            value: record.value,
            importance: record.importance,
        }
    }
}

/// Reads calendar rows from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvCalendarSource {
    path: PathBuf,
}

impl CsvCalendarSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CalendarSource for CsvCalendarSource {
    fn read_rows(&self) -> Result<Vec<RawRow>> {
        let file = std::fs::File::open(&self.path)?;
        read_rows_from(file)
    }
}

/// Parses CSV data from any reader.
///
/// # Errors
///
/// Returns [`Error::Csv`](crate::error::Error::Csv) for malformed data and
/// [`Error::Io`](crate::error::Error::Io) when the reader fails.
pub fn read_rows_from<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<CsvRecord>() {
        rows.push(record?.into());
    }
    Ok(rows)
}
