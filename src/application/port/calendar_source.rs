// SPDX-License-Identifier: MPL-2.0
//! Calendar source port definition.
//!
//! A [`CalendarSource`] yields the rows of a tabular file as loosely typed
//! [`RawRow`]s. Validation (known days, importance keys) is the job of the
//! import use case, not of the source.

use crate::error::Result;

/// One data row, keyed by column name.
///
/// A column that is absent from the file, or a cell that is missing from a
/// short row, is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub day: Option<String>,
    pub time: Option<String>,
    pub flags: Option<String>,
    pub description: Option<String>,
    pub value: Option<String>,
    pub importance: Option<String>,
}

/// Trait for reading calendar rows.
///
/// # Errors
///
/// Implementations return [`Error::Io`](crate::error::Error::Io) when the
/// underlying data cannot be read and [`Error::Csv`](crate::error::Error::Csv)
/// when it is malformed.
pub trait CalendarSource {
    /// Reads every data row, in file order. The header row is not returned.
    fn read_rows(&self) -> Result<Vec<RawRow>>;
}
