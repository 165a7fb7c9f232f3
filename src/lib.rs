// SPDX-License-Identifier: MPL-2.0
//! `econ_calendar` is an editor for weekly economic-calendar cards built with
//! the Iced GUI framework.
//!
//! News items are edited inline, grouped by weekday, and rendered live into a
//! fixed 960×1200 card that can be exported as PNG. Strings are localized with
//! Fluent and preferences are read from a TOML file.

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod render;
pub mod ui;
