// SPDX-License-Identifier: MPL-2.0
//! Core calendar value types.

use std::fmt;

// =============================================================================
// Weekday
// =============================================================================

/// Trading day a news item is scheduled on.
///
/// The calendar only covers the five weekdays; the order of [`Weekday::ALL`]
/// is the order in which days appear in the editor and the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All days, in display order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Short label used in the preview header and in CSV files.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }

    /// Position of the day inside [`Weekday::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parses a day label, accepting short (`Tue`) and long (`Tuesday`) forms
    /// in any case. Surrounding whitespace is ignored.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.trim().to_ascii_lowercase();
        let day = match lower.as_str() {
            "mon" | "monday" => Weekday::Mon,
            "tue" | "tues" | "tuesday" => Weekday::Tue,
            "wed" | "wednesday" => Weekday::Wed,
            "thu" | "thur" | "thurs" | "thursday" => Weekday::Thu,
            "fri" | "friday" => Weekday::Fri,
            _ => return None,
        };
        Some(day)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Importance
// =============================================================================

/// Severity tier of a calendar event; drives the marker drawn next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Importance {
    High,
    #[default]
    Medium,
    Low,
}

impl Importance {
    /// All tiers, in picker order.
    pub const ALL: [Importance; 3] = [Importance::High, Importance::Medium, Importance::Low];

    /// Stable key used in CSV files.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Importance::High => "high",
            Importance::Medium => "medium",
            Importance::Low => "low",
        }
    }

    /// Parses a CSV key (case-insensitive).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Importance::High),
            "medium" => Some(Importance::Medium),
            "low" => Some(Importance::Low),
            _ => None,
        }
    }
}

// =============================================================================
// ItemId
// =============================================================================

/// Identifier of a news item, unique within its [`NewsList`](super::NewsList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// NewsEntry / NewsItem
// =============================================================================

/// The editable content of a news item, without identity.
///
/// Produced by CSV import and by the "add row" defaults; turned into a
/// [`NewsItem`] when the list assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsEntry {
    pub day: Weekday,
    /// Free-form time label, not validated.
    pub time: String,
    /// Comma-joined country codes, see [`flags`](super::flags).
    pub flags: String,
    pub description: String,
    pub value: String,
    pub importance: Importance,
}

impl NewsEntry {
    /// Entry with every text field empty.
    #[must_use]
    pub fn blank(day: Weekday) -> Self {
        Self {
            day,
            time: String::new(),
            flags: String::new(),
            description: String::new(),
            value: String::new(),
            importance: Importance::Low,
        }
    }
}

/// One row of the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: ItemId,
    pub day: Weekday,
    pub time: String,
    pub flags: String,
    pub description: String,
    pub value: String,
    pub importance: Importance,
}

impl NewsItem {
    #[must_use]
    pub fn from_entry(id: ItemId, entry: NewsEntry) -> Self {
        Self {
            id,
            day: entry.day,
            time: entry.time,
            flags: entry.flags,
            description: entry.description,
            value: entry.value,
            importance: entry.importance,
        }
    }

    /// Returns the content of this item without its id.
    #[must_use]
    pub fn to_entry(&self) -> NewsEntry {
        NewsEntry {
            day: self.day,
            time: self.time.clone(),
            flags: self.flags.clone(),
            description: self.description.clone(),
            value: self.value.clone(),
            importance: self.importance,
        }
    }

    /// Replaces the field named by `update`.
    ///
    /// Returns `false` when the new value equals the current one.
    pub fn apply(&mut self, update: FieldUpdate) -> bool {
        match update {
            FieldUpdate::Day(day) => replace_if_changed(&mut self.day, day),
            FieldUpdate::Time(time) => replace_if_changed(&mut self.time, time),
            FieldUpdate::Flags(flags) => replace_if_changed(&mut self.flags, flags),
            FieldUpdate::Description(text) => replace_if_changed(&mut self.description, text),
            FieldUpdate::Value(value) => replace_if_changed(&mut self.value, value),
            FieldUpdate::Importance(importance) => {
                replace_if_changed(&mut self.importance, importance)
            }
        }
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// A new value for exactly one field of a [`NewsItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Day(Weekday),
    Time(String),
    Flags(String),
    Description(String),
    Value(String),
    Importance(Importance),
}
