// SPDX-License-Identifier: MPL-2.0
//! Calendar content a session starts with when nothing is imported.

use super::types::{Importance, NewsEntry, Weekday};

fn entry(
    day: Weekday,
    time: &str,
    flags: &str,
    description: &str,
    value: &str,
    importance: Importance,
) -> NewsEntry {
    NewsEntry {
        day,
        time: time.to_string(),
        flags: flags.to_string(),
        description: description.to_string(),
        value: value.to_string(),
        importance,
    }
}

/// Four rows spread over Monday to Wednesday.
#[must_use]
pub fn sample_entries() -> Vec<NewsEntry> {
    vec![
        entry(Weekday::Mon, "", "GB,USA", "วันหยุดธนาคาร", "", Importance::Low),
        entry(
            Weekday::Tue,
            "19:30",
            "USA",
            "ยอดคำสั่งซื้อสินค้าคงทน (เดือนต่อเดือน) (เม.ย.)",
            "9.2%",
            Importance::Medium,
        ),
        entry(
            Weekday::Tue,
            "21:00",
            "USA",
            "รายงานความเชื่อมั่นผู้บริโภคจากซีบี (พ.ค.)",
            "86.0",
            Importance::High,
        ),
        entry(
            Weekday::Wed,
            "09:00",
            "NZ",
            "การตัดสินใจเกี่ยวกับอัตราดอกเบี้ย",
            "3.50%",
            Importance::High,
        ),
    ]
}

/// Defaults of a row added with the "add" button of `day`.
#[must_use]
pub fn new_row_entry(day: Weekday, description: String) -> NewsEntry {
    NewsEntry {
        time: "00:00".to_string(),
        flags: "USA".to_string(),
        description,
        importance: Importance::Medium,
        ..NewsEntry::blank(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::NewsList;

    #[test]
    fn sample_fills_three_days() {
        let list = NewsList::from_entries(sample_entries());
        let grouping = list.grouping();
        assert_eq!(grouping.day(Weekday::Mon).len(), 1);
        assert_eq!(grouping.day(Weekday::Tue).len(), 2);
        assert_eq!(grouping.day(Weekday::Wed).len(), 1);
        assert!(grouping.day(Weekday::Fri).is_empty());
    }

    #[test]
    fn new_row_defaults() {
        let entry = new_row_entry(Weekday::Thu, "New event".to_string());
        assert_eq!(entry.day, Weekday::Thu);
        assert_eq!(entry.time, "00:00");
        assert_eq!(entry.flags, "USA");
        assert_eq!(entry.importance, Importance::Medium);
        assert!(entry.value.is_empty());
    }
}
