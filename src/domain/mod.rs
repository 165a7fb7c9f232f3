// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core calendar logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`calendar`]: News items, the list controller ([`NewsList`](calendar::NewsList)),
//!   the derived day grouping and presentation settings
//! - [`reference`]: Static lookup tables (flags, countries, importance markers)
//! - [`text_fit`]: Letter-spacing auto-fit for fixed-width text cells

pub mod calendar;
pub mod reference;
pub mod text_fit;
