// SPDX-License-Identifier: MPL-2.0
//! Per-day view over a list of news items.

use super::types::{NewsItem, Weekday};

/// Items bucketed by [`Weekday`], borrowing from the list they were built from.
///
/// A grouping is a pure function of the item slice: it keeps the relative
/// order of the items and always has a (possibly empty) bucket for each of
/// the five days. Because it borrows the list, it cannot outlive a mutation
/// of that list.
#[derive(Debug, Clone)]
pub struct DayGrouping<'a> {
    buckets: [Vec<&'a NewsItem>; 5],
}

impl<'a> DayGrouping<'a> {
    /// Builds the grouping for `items`.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a NewsItem>,
    {
        let mut buckets: [Vec<&'a NewsItem>; 5] = Default::default();
        for item in items {
            buckets[item.day.index()].push(item);
        }
        Self { buckets }
    }

    /// Items scheduled on `day`, in list order.
    #[must_use]
    pub fn day(&self, day: Weekday) -> &[&'a NewsItem] {
        &self.buckets[day.index()]
    }

    /// Every day with its items, in display order, including empty days.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[&'a NewsItem])> + '_ {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day, self.day(day)))
    }

    /// Only the days that have at least one item.
    pub fn non_empty(&self) -> impl Iterator<Item = (Weekday, &[&'a NewsItem])> + '_ {
        self.iter().filter(|(_, items)| !items.is_empty())
    }

    /// Total number of items across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
