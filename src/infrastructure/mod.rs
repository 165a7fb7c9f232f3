// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, and the I/O the application needs at startup.
//!
//! # Available Adapters
//!
//! - [`csv_source`]: CSV files via the `csv` crate (implements [`CalendarSource`])
//! - [`assets`]: Flag images over HTTP (`reqwest`) and the background image from disk
//!
//! [`CalendarSource`]: crate::application::port::CalendarSource

pub mod assets;
pub mod csv_source;

// Re-export main types for convenience
pub use assets::{fetch_flags, read_background, FlagImages};
pub use csv_source::CsvCalendarSource;
