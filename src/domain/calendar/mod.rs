// SPDX-License-Identifier: MPL-2.0
//! Calendar domain: news items, their owning list and the presentation settings.
//!
//! The [`NewsList`] is the single source of truth for the items shown in both
//! the editor and the preview. The per-day view ([`DayGrouping`]) is always
//! derived from it on demand and never stored next to it.

pub mod flags;
mod grouping;
mod news_list;
pub mod newtypes;
pub mod sample;
mod settings;
mod types;

pub use grouping::DayGrouping;
pub use news_list::NewsList;
pub use newtypes::{TopMargin, VerticalPadding};
pub use settings::{BackgroundTheme, CalendarSettings, ViewMode};
pub use types::{FieldUpdate, Importance, ItemId, NewsEntry, NewsItem, Weekday};
