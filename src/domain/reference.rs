// SPDX-License-Identifier: MPL-2.0
//! Static reference data: known flags, the selectable country list and the
//! importance markers.
//!
//! Everything here is a constant table. Lookups for codes that are not in
//! the tables return `None`; callers render nothing for them.

use super::calendar::Importance;
use std::fmt;

/// Default base URL flag images are fetched from.
pub const DEFAULT_FLAG_BASE_URL: &str = "https://flagcdn.com/w80";

/// Country code as stored on an item, paired with the file name the flag
/// CDN uses for it.
const FLAG_TABLE: [(&str, &str); 10] = [
    ("AU", "au"),
    ("CA", "ca"),
    ("CN", "cn"),
    ("GB", "gb"),
    ("EU", "eu"),
    ("DE", "de"),
    ("JP", "jp"),
    ("NZ", "nz"),
    ("CH", "ch"),
    ("USA", "us"),
];

/// Returns the CDN file stem for a known country code.
#[must_use]
pub fn flag_cdn_code(code: &str) -> Option<&'static str> {
    FLAG_TABLE
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, cdn)| *cdn)
}

/// Returns the image URL of a known country code under `base_url`.
#[must_use]
pub fn flag_url(base_url: &str, code: &str) -> Option<String> {
    flag_cdn_code(code).map(|cdn| format!("{}/{cdn}.png", base_url.trim_end_matches('/')))
}

/// Every code that has a flag image.
pub fn known_flag_codes() -> impl Iterator<Item = &'static str> {
    FLAG_TABLE.iter().map(|(code, _)| *code)
}

// =============================================================================
// Countries
// =============================================================================

/// An entry of the flag picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    /// Localization key of the display name.
    pub name_key: &'static str,
}

/// Countries offered by the flag picker, in picker order.
pub const COUNTRIES: [Country; 10] = [
    Country {
        code: "USA",
        name_key: "country-usa",
    },
    Country {
        code: "EU",
        name_key: "country-eu",
    },
    Country {
        code: "GB",
        name_key: "country-gb",
    },
    Country {
        code: "JP",
        name_key: "country-jp",
    },
    Country {
        code: "DE",
        name_key: "country-de",
    },
    Country {
        code: "CA",
        name_key: "country-ca",
    },
    Country {
        code: "AU",
        name_key: "country-au",
    },
    Country {
        code: "NZ",
        name_key: "country-nz",
    },
    Country {
        code: "CH",
        name_key: "country-ch",
    },
    Country {
        code: "CN",
        name_key: "country-cn",
    },
];

// =============================================================================
// Importance markers
// =============================================================================

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    /// Formats as `#RRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// How an importance tier is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportanceMeta {
    /// Localization key of the picker label.
    pub label_key: &'static str,
    pub fill: Rgb,
    pub stroke: Rgb,
    /// Whether the marker is drawn on the exported card. Low-importance rows
    /// keep the marker slot empty.
    pub show_in_preview: bool,
}

const HIGH: ImportanceMeta = ImportanceMeta {
    label_key: "importance-high",
    fill: Rgb::new(0xEF, 0x44, 0x44),
    stroke: Rgb::new(0xB9, 0x1C, 0x1C),
    show_in_preview: true,
};

const MEDIUM: ImportanceMeta = ImportanceMeta {
    label_key: "importance-medium",
    fill: Rgb::new(0xF9, 0x73, 0x16),
    stroke: Rgb::new(0xC2, 0x41, 0x0C),
    show_in_preview: true,
};

const LOW: ImportanceMeta = ImportanceMeta {
    label_key: "importance-low",
    fill: Rgb::new(0x4B, 0x55, 0x63),
    stroke: Rgb::new(0x6B, 0x72, 0x80),
    show_in_preview: false,
};

/// Presentation metadata of an importance tier.
#[must_use]
pub fn importance_meta(importance: Importance) -> &'static ImportanceMeta {
    match importance {
        Importance::High => &HIGH,
        Importance::Medium => &MEDIUM,
        Importance::Low => &LOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usa_maps_to_us_image() {
        assert_eq!(
            flag_url(DEFAULT_FLAG_BASE_URL, "USA").as_deref(),
            Some("https://flagcdn.com/w80/us.png")
        );
    }

    #[test]
    fn unknown_code_has_no_url() {
        assert!(flag_url(DEFAULT_FLAG_BASE_URL, "XX").is_none());
        assert!(flag_url(DEFAULT_FLAG_BASE_URL, "usa").is_none());
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        assert_eq!(
            flag_url("http://localhost/flags/", "NZ").as_deref(),
            Some("http://localhost/flags/nz.png")
        );
    }

    #[test]
    fn every_country_has_a_flag() {
        for country in COUNTRIES {
            assert!(flag_cdn_code(country.code).is_some(), "{}", country.code);
        }
        assert_eq!(known_flag_codes().count(), COUNTRIES.len());
    }

    #[test]
    fn only_low_importance_is_hidden_in_preview() {
        assert!(importance_meta(Importance::High).show_in_preview);
        assert!(importance_meta(Importance::Medium).show_in_preview);
        assert!(!importance_meta(Importance::Low).show_in_preview);
    }

    #[test]
    fn colors_format_as_hex() {
        assert_eq!(importance_meta(Importance::High).fill.to_string(), "#EF4444");
        assert_eq!(importance_meta(Importance::Medium).stroke.to_string(), "#C2410C");
    }
}
