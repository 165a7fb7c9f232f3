// SPDX-License-Identifier: MPL-2.0
//! The ordered list of news items and its id allocator.

use std::sync::Arc;

use super::grouping::DayGrouping;
use super::types::{FieldUpdate, ItemId, NewsEntry, NewsItem, Weekday};

/// Single source of truth for the calendar rows.
///
/// Items are stored behind [`Arc`] so that a mutation only reallocates the
/// item it touches: every other item keeps its pointer identity, which lets
/// views compare items cheaply between two revisions.
///
/// Ids come from one monotonic counter shared by every operation that
/// creates items. An id handed out once is never handed out again, even
/// after the item carrying it is removed or the whole list is replaced.
#[derive(Debug, Clone)]
pub struct NewsList {
    items: Vec<Arc<NewsItem>>,
    next_id: u64,
    revision: u64,
}

impl NewsList {
    /// Builds a list from entries, numbering them from 1.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = NewsEntry>,
    {
        let items: Vec<NewsItem> = entries
            .into_iter()
            .zip(1..)
            .map(|(entry, raw)| NewsItem::from_entry(ItemId::new(raw), entry))
            .collect();
        Self::from_items(items)
    }

    /// Builds a list from already identified items.
    ///
    /// The allocator starts right after the largest existing id.
    #[must_use]
    pub fn from_items(items: Vec<NewsItem>) -> Self {
        let next_id = items.iter().map(|item| item.id.get()).max().unwrap_or(0) + 1;
        Self {
            items: items.into_iter().map(Arc::new).collect(),
            next_id,
            revision: 0,
        }
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Items in list order.
    #[must_use]
    pub fn items(&self) -> &[Arc<NewsItem>] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&NewsItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(AsRef::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counter bumped by every mutation that changed the list.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Groups the current items by day.
    ///
    /// The grouping is derived on every call and borrows the list.
    #[must_use]
    pub fn grouping(&self) -> DayGrouping<'_> {
        DayGrouping::from_items(self.items.iter().map(AsRef::as_ref))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replaces one field of the item with `id`.
    ///
    /// Returns `false` for unknown ids and for values equal to the current
    /// one; in both cases the list is left untouched.
    pub fn update_field(&mut self, id: ItemId, update: FieldUpdate) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if !field_differs(&self.items[index], &update) {
            return false;
        }
        Arc::make_mut(&mut self.items[index]).apply(update);
        self.bump();
        true
    }

    /// Appends a new item on `day`, built from `defaults`.
    pub fn add_item(&mut self, day: Weekday, defaults: NewsEntry) -> ItemId {
        let id = self.allocate_id();
        let entry = NewsEntry { day, ..defaults };
        self.items.push(Arc::new(NewsItem::from_entry(id, entry)));
        self.bump();
        id
    }

    /// Removes the item with `id`. Returns `false` when it does not exist.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.items.remove(index);
        self.bump();
        true
    }

    /// Inserts a copy of the item with `id` right after it.
    ///
    /// Returns the id of the copy, or `None` when the source does not exist.
    pub fn duplicate_item(&mut self, id: ItemId) -> Option<ItemId> {
        let index = self.position(id)?;
        let copy_id = self.allocate_id();
        let copy = NewsItem::from_entry(copy_id, self.items[index].to_entry());
        self.items.insert(index + 1, Arc::new(copy));
        self.bump();
        Some(copy_id)
    }

    /// Replaces every item with `entries`, allocating fresh ids.
    pub fn replace_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = NewsEntry>,
    {
        let mut items = Vec::new();
        for entry in entries {
            items.push(Arc::new(NewsItem::from_entry(self.allocate_id(), entry)));
        }
        self.items = items;
        self.bump();
    }
}

fn field_differs(item: &NewsItem, update: &FieldUpdate) -> bool {
    match update {
        FieldUpdate::Day(day) => item.day != *day,
        FieldUpdate::Time(time) => item.time != *time,
        FieldUpdate::Flags(flags) => item.flags != *flags,
        FieldUpdate::Description(text) => item.description != *text,
        FieldUpdate::Value(value) => item.value != *value,
        FieldUpdate::Importance(importance) => item.importance != *importance,
    }
}

impl Default for NewsList {
    fn default() -> Self {
        Self::from_entries(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::Importance;
    use std::collections::HashSet;

    fn entry(day: Weekday, description: &str) -> NewsEntry {
        NewsEntry {
            description: description.to_string(),
            ..NewsEntry::blank(day)
        }
    }

    fn sample() -> NewsList {
        NewsList::from_entries(vec![
            entry(Weekday::Mon, "Holiday"),
            entry(Weekday::Tue, "Durable goods"),
            entry(Weekday::Tue, "Consumer confidence"),
            entry(Weekday::Wed, "Rate decision"),
        ])
    }

    fn assert_partitions(list: &NewsList) {
        let grouping = list.grouping();
        assert_eq!(grouping.len(), list.len());
        for (day, items) in grouping.iter() {
            assert!(items.iter().all(|item| item.day == day));
        }
    }

    fn assert_unique_ids(list: &NewsList) {
        let ids: HashSet<ItemId> = list.items().iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn from_entries_numbers_from_one() {
        let list = sample();
        let ids: Vec<u64> = list.items().iter().map(|item| item.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn from_items_continues_after_max_id() {
        let mut list = NewsList::from_items(vec![NewsItem::from_entry(
            ItemId::new(10),
            NewsEntry::blank(Weekday::Fri),
        )]);
        let id = list.add_item(Weekday::Mon, NewsEntry::blank(Weekday::Mon));
        assert_eq!(id, ItemId::new(11));
    }

    #[test]
    fn update_field_keeps_other_items_pointer_equal() {
        let mut list = sample();
        let before: Vec<Arc<NewsItem>> = list.items().to_vec();

        assert!(list.update_field(ItemId::new(2), FieldUpdate::Value("9.2%".into())));

        let after = list.items();
        assert!(Arc::ptr_eq(&before[0], &after[0]));
        assert!(!Arc::ptr_eq(&before[1], &after[1]));
        assert!(Arc::ptr_eq(&before[2], &after[2]));
        assert!(Arc::ptr_eq(&before[3], &after[3]));
        assert_eq!(after[1].value, "9.2%");
        assert_eq!(after[1].description, before[1].description);
    }

    #[test]
    fn update_field_on_unknown_id_is_noop() {
        let mut list = sample();
        let revision = list.revision();
        assert!(!list.update_field(ItemId::new(99), FieldUpdate::Time("x".into())));
        assert_eq!(list.revision(), revision);
    }

    #[test]
    fn update_field_with_same_value_does_not_bump_revision() {
        let mut list = sample();
        let revision = list.revision();
        assert!(!list.update_field(
            ItemId::new(1),
            FieldUpdate::Description("Holiday".into())
        ));
        assert_eq!(list.revision(), revision);
    }

    #[test]
    fn changing_day_moves_item_between_buckets() {
        let mut list = sample();
        list.update_field(ItemId::new(1), FieldUpdate::Day(Weekday::Fri));
        let grouping = list.grouping();
        assert!(grouping.day(Weekday::Mon).is_empty());
        assert_eq!(grouping.day(Weekday::Fri)[0].id, ItemId::new(1));
        assert_partitions(&list);
    }

    #[test]
    fn duplicate_inserts_copy_after_source() {
        let mut list = sample();
        let copy = list.duplicate_item(ItemId::new(2)).expect("source exists");

        assert_eq!(list.len(), 5);
        let source = &list.items()[1];
        let duplicate = &list.items()[2];
        assert_eq!(duplicate.id, copy);
        assert_ne!(duplicate.id, source.id);
        assert_eq!(duplicate.to_entry(), source.to_entry());
    }

    #[test]
    fn duplicate_of_unknown_id_is_noop() {
        let mut list = sample();
        assert!(list.duplicate_item(ItemId::new(42)).is_none());
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn remove_then_add_never_reuses_ids() {
        let mut list = sample();
        assert!(list.remove_item(ItemId::new(4)));
        let id = list.add_item(Weekday::Thu, NewsEntry::blank(Weekday::Mon));
        assert_eq!(id, ItemId::new(5));
        assert_eq!(list.get(id).map(|item| item.day), Some(Weekday::Thu));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = sample();
        assert!(!list.remove_item(ItemId::new(77)));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn replace_all_allocates_fresh_ids() {
        let mut list = sample();
        list.replace_all(vec![entry(Weekday::Tue, "Imported")]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, ItemId::new(5));
        let next = list.add_item(Weekday::Mon, NewsEntry::blank(Weekday::Mon));
        assert_eq!(next, ItemId::new(6));
    }

    #[test]
    fn ids_stay_unique_across_mixed_operations() {
        let mut list = sample();
        for round in 0..20_u64 {
            let day = Weekday::ALL[(round % 5) as usize];
            let added = list.add_item(day, NewsEntry::blank(day));
            list.duplicate_item(added);
            if round % 3 == 0 {
                list.remove_item(ItemId::new(round + 1));
            }
            if round % 7 == 6 {
                let entries: Vec<NewsEntry> =
                    list.items().iter().map(|item| item.to_entry()).collect();
                list.replace_all(entries);
            }
            list.update_field(added, FieldUpdate::Importance(Importance::High));
            assert_unique_ids(&list);
            assert_partitions(&list);
        }
    }

    #[test]
    fn empty_list_groups_to_empty_days() {
        let list = NewsList::default();
        assert!(list.grouping().is_empty());
        assert_eq!(list.grouping().iter().count(), 5);
    }
}
