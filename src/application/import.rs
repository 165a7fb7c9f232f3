// SPDX-License-Identifier: MPL-2.0
//! Calendar import use case.
//!
//! Turns the raw rows of a [`CalendarSource`] into [`NewsEntry`] values:
//!
//! - rows with an empty `day` cell are blank lines and are dropped silently
//! - rows whose day is not a known weekday are dropped and counted
//! - a missing or unknown `importance` falls back to [`Importance::Low`]
//! - every other missing column becomes an empty string
//!
//! Ids are not assigned here; the [`NewsList`](crate::domain::calendar::NewsList)
//! allocates them when the entries replace its content.

use super::port::{CalendarSource, RawRow};
use crate::domain::calendar::{Importance, NewsEntry, Weekday};
use crate::error::Result;

/// Result of converting a batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Valid entries, in file order.
    pub entries: Vec<NewsEntry>,
    /// Rows dropped because their day was not recognized.
    pub unknown_day: usize,
    /// Rows dropped because their day cell was empty.
    pub blank: usize,
}

impl ImportOutcome {
    /// Whether the import produced nothing that could replace the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Converts raw rows into entries.
#[must_use]
pub fn entries_from_rows(rows: Vec<RawRow>) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for row in rows {
        let day_cell = row.day.as_deref().unwrap_or_default();
        if day_cell.trim().is_empty() {
            outcome.blank += 1;
            continue;
        }
        let Some(day) = Weekday::from_label(day_cell) else {
            outcome.unknown_day += 1;
            continue;
        };
        let importance = row
            .importance
            .as_deref()
            .and_then(Importance::from_key)
            .unwrap_or(Importance::Low);
        outcome.entries.push(NewsEntry {
            day,
            time: row.time.unwrap_or_default(),
            flags: row.flags.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            value: row.value.unwrap_or_default(),
            importance,
        });
    }
    outcome
}

/// Reads `source` and converts its rows.
///
/// # Errors
///
/// Propagates the read error of the source unchanged.
pub fn import_from(source: &impl CalendarSource) -> Result<ImportOutcome> {
    let rows = source.read_rows()?;
    Ok(entries_from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn row(day: Option<&str>, importance: Option<&str>) -> RawRow {
        RawRow {
            day: day.map(str::to_string),
            importance: importance.map(str::to_string),
            description: Some("Event".into()),
            ..RawRow::default()
        }
    }

    struct FixedSource(Vec<RawRow>);

    impl CalendarSource for FixedSource {
        fn read_rows(&self) -> Result<Vec<RawRow>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl CalendarSource for FailingSource {
        fn read_rows(&self) -> Result<Vec<RawRow>> {
            Err(Error::Csv("unterminated quote".into()))
        }
    }

    #[test]
    fn blank_day_rows_are_dropped() {
        let outcome = entries_from_rows(vec![
            row(Some("Tue"), Some("high")),
            row(Some(""), Some("high")),
            row(None, None),
        ]);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.blank, 2);
        assert_eq!(outcome.unknown_day, 0);
    }

    #[test]
    fn unknown_days_are_counted() {
        let outcome = entries_from_rows(vec![row(Some("Sat"), None), row(Some("Mon"), None)]);
        assert_eq!(outcome.unknown_day, 1);
        assert_eq!(outcome.entries[0].day, Weekday::Mon);
    }

    #[test]
    fn importance_defaults_to_low() {
        let outcome = entries_from_rows(vec![
            row(Some("Mon"), None),
            row(Some("Mon"), Some("urgent")),
            row(Some("Mon"), Some("Medium")),
        ]);
        let tiers: Vec<Importance> = outcome.entries.iter().map(|e| e.importance).collect();
        assert_eq!(tiers, vec![Importance::Low, Importance::Low, Importance::Medium]);
    }

    #[test]
    fn missing_columns_become_empty() {
        let outcome = entries_from_rows(vec![RawRow {
            day: Some("Fri".into()),
            ..RawRow::default()
        }]);
        let entry = &outcome.entries[0];
        assert!(entry.time.is_empty());
        assert!(entry.flags.is_empty());
        assert!(entry.description.is_empty());
        assert!(entry.value.is_empty());
    }

    #[test]
    fn zero_valid_rows_is_empty_outcome() {
        let outcome = entries_from_rows(vec![row(Some(""), None)]);
        assert!(outcome.is_empty());
    }

    #[test]
    fn import_from_source_converts_rows() {
        let source = FixedSource(vec![row(Some("Tue"), Some("high"))]);
        let outcome = import_from(&source).expect("fixed source never fails");
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].importance, Importance::High);
    }

    #[test]
    fn import_from_propagates_source_errors() {
        let err = import_from(&FailingSource).expect_err("source fails");
        assert!(matches!(err, Error::Csv(_)));
    }
}
