// SPDX-License-Identifier: MPL-2.0
//! Helpers for the comma-joined country code list stored on a news item.
//!
//! Codes are kept as typed by the user: unknown codes are preserved and
//! duplicates are not collapsed. Rendering code looks each code up in
//! [`reference::flag_url`](crate::domain::reference::flag_url) and simply
//! skips codes it does not know.

const SEPARATOR: &str = ",";

/// Iterates over the non-empty, trimmed codes of a flag list, in order.
pub fn codes(flags: &str) -> impl Iterator<Item = &str> {
    flags
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|code| !code.is_empty())
}

/// Returns whether `code` appears in the list as an exact match.
#[must_use]
pub fn contains(flags: &str, code: &str) -> bool {
    codes(flags).any(|existing| existing == code)
}

/// Toggles `code` in the list.
///
/// When the code is present every exact match is removed; otherwise it is
/// appended at the end. Re-adding a removed code therefore moves it to the
/// back rather than restoring its former position.
#[must_use]
pub fn toggle(flags: &str, code: &str) -> String {
    let mut list: Vec<&str> = codes(flags).collect();
    if list.contains(&code) {
        list.retain(|existing| *existing != code);
    } else {
        list.push(code);
    }
    list.join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_removes_then_appends_at_end() {
        let removed = toggle("GB,USA", "GB");
        assert_eq!(removed, "USA");
        let re_added = toggle(&removed, "GB");
        assert_eq!(re_added, "USA,GB");
    }

    #[test]
    fn toggle_on_empty_list_adds_single_code() {
        assert_eq!(toggle("", "JP"), "JP");
    }

    #[test]
    fn toggle_removes_every_duplicate() {
        assert_eq!(toggle("EU,GB,EU", "EU"), "GB");
    }

    #[test]
    fn codes_trims_and_skips_empty_segments() {
        let parsed: Vec<&str> = codes(" GB , ,USA,").collect();
        assert_eq!(parsed, vec!["GB", "USA"]);
    }

    #[test]
    fn contains_requires_exact_match() {
        assert!(contains("USA,GB", "GB"));
        assert!(!contains("USA", "US"));
    }

    #[test]
    fn toggle_writes_back_trimmed_codes() {
        assert_eq!(toggle(" GB , ,USA", "JP"), "GB,USA,JP");
    }

    #[test]
    fn unknown_codes_are_preserved() {
        assert_eq!(toggle("XX", "GB"), "XX,GB");
    }
}
