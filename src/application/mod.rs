// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`import`]: Turning raw tabular rows into calendar entries
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use econ_calendar::application::import::import_from;
//! use econ_calendar::infrastructure::CsvCalendarSource;
//!
//! let source = CsvCalendarSource::new("week.csv");
//! let outcome = import_from(&source)?;
//! list.replace_all(outcome.entries);
//! ```

pub mod import;
pub mod port;
