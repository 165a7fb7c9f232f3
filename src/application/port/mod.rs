// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`calendar_source`]: Reading raw calendar rows (CSV files)
//! - [`text_measure`]: Measuring rendered text width for the auto-fit
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `usvg` types)
//! - No `async fn` - use Iced's `Task` return type pattern in callers

pub mod calendar_source;
pub mod text_measure;

// Re-export main types for convenience
pub use calendar_source::{CalendarSource, RawRow};
pub use text_measure::{TextMeasure, TextStyle};
