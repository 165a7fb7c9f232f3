// SPDX-License-Identifier: MPL-2.0
use econ_calendar::application::import::import_from;
use econ_calendar::domain::calendar::{Importance, NewsList, Weekday};
use econ_calendar::error::Error;
use econ_calendar::infrastructure::CsvCalendarSource;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/week.csv")
}

#[test]
fn row_without_day_is_dropped() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("single.csv");
    fs::write(
        &path,
        "day,time,flags,description,value,importance\n\
         Tue,19:30,USA,X,9.2%,medium\n\
         ,,,no day,,\n",
    )
    .expect("write csv");

    let outcome = import_from(&CsvCalendarSource::new(&path)).expect("import");

    assert_eq!(outcome.entries.len(), 1);
    let entry = &outcome.entries[0];
    assert_eq!(entry.day, Weekday::Tue);
    assert_eq!(entry.time, "19:30");
    assert_eq!(entry.flags, "USA");
    assert_eq!(entry.description, "X");
    assert_eq!(entry.value, "9.2%");
    assert_eq!(entry.importance, Importance::Medium);
    assert_eq!(outcome.blank, 1);
    assert_eq!(outcome.unknown_day, 0);
}

#[test]
fn fixture_keeps_known_days_in_file_order() {
    let outcome = import_from(&CsvCalendarSource::new(fixture())).expect("import");

    let days: Vec<Weekday> = outcome.entries.iter().map(|entry| entry.day).collect();
    assert_eq!(days, vec![Weekday::Tue, Weekday::Thu, Weekday::Wed]);
    assert_eq!(outcome.unknown_day, 1, "Saturday row is counted");
    assert_eq!(outcome.blank, 1);

    let thursday = &outcome.entries[1];
    assert_eq!(thursday.flags, "EU,DE");
    assert_eq!(thursday.importance, Importance::High);

    let wednesday = &outcome.entries[2];
    assert_eq!(wednesday.importance, Importance::Low, "missing importance is low");
    assert!(wednesday.value.is_empty());
}

#[test]
fn missing_columns_default_to_empty() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("narrow.csv");
    fs::write(&path, "description,day\nCPI,Fri\n").expect("write csv");

    let outcome = import_from(&CsvCalendarSource::new(&path)).expect("import");

    assert_eq!(outcome.entries.len(), 1);
    let entry = &outcome.entries[0];
    assert_eq!(entry.day, Weekday::Fri);
    assert_eq!(entry.description, "CPI");
    assert!(entry.time.is_empty());
    assert!(entry.flags.is_empty());
    assert_eq!(entry.importance, Importance::Low);
}

#[test]
fn header_only_file_is_empty() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("empty.csv");
    fs::write(&path, "day,time,flags,description,value,importance\n").expect("write csv");

    let outcome = import_from(&CsvCalendarSource::new(&path)).expect("import");
    assert!(outcome.is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let result = import_from(&CsvCalendarSource::new(dir.path().join("absent.csv")));
    assert!(matches!(result, Err(Error::Io(_))), "{result:?}");
}

#[test]
fn imported_rows_get_fresh_ids() {
    let mut list = NewsList::from_entries(
        econ_calendar::domain::calendar::sample::sample_entries(),
    );
    let old_ids: HashSet<_> = list.items().iter().map(|item| item.id).collect();

    let outcome = import_from(&CsvCalendarSource::new(fixture())).expect("import");
    list.replace_all(outcome.entries);

    assert_eq!(list.len(), 3);
    let new_ids: HashSet<_> = list.items().iter().map(|item| item.id).collect();
    assert_eq!(new_ids.len(), 3);
    assert!(new_ids.is_disjoint(&old_ids));
}
