// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small SVG documents embedded in the binary. Handles are created
//! once and cached with `OnceLock`; every icon is tinted with the theme's
//! text color at render time so one source serves light and dark modes.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `remove_row`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(concat!(
                    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                    $path,
                    "</svg>"
                ).as_bytes())
            });
            Svg::new(handle.clone()).style(tinted)
        }
    };
}

fn tinted(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}

// =============================================================================
// Row Actions
// =============================================================================

define_icon!(plus, r#"<path d="M12 5v14M5 12h14"/>"#, "Plus sign.");
define_icon!(
    copy,
    r#"<rect x="9" y="9" width="12" height="12" rx="2"/><path d="M5 15V5a2 2 0 0 1 2-2h10"/>"#,
    "Two overlapping rectangles."
);
define_icon!(
    trash,
    r#"<path d="M3 6h18M8 6V4h8v2M6 6l1 14h10l1-14"/>"#,
    "Trash can."
);

// =============================================================================
// Toolbar
// =============================================================================

define_icon!(
    upload,
    r#"<path d="M12 16V4M7 9l5-5 5 5M4 20h16"/>"#,
    "Arrow pointing up out of a tray."
);
define_icon!(
    download,
    r#"<path d="M12 4v12M7 11l5 5 5-5M4 20h16"/>"#,
    "Arrow pointing down into a tray."
);
define_icon!(
    eye,
    r#"<path d="M2 12s4-7 10-7 10 7 10 7-4 7-10 7S2 12 2 12z"/><circle cx="12" cy="12" r="3"/>"#,
    "Open eye."
);
define_icon!(
    arrow_left,
    r#"<path d="M19 12H5M11 6l-6 6 6 6"/>"#,
    "Arrow pointing left."
);
define_icon!(
    refresh,
    r#"<path d="M20 12a8 8 0 1 1-2.34-5.66M20 4v5h-5"/>"#,
    "Circular arrow."
);

// =============================================================================
// Notifications
// =============================================================================

define_icon!(cross, r#"<path d="M6 6l12 12M18 6L6 18"/>"#, "Diagonal cross.");
define_icon!(checkmark, r#"<path d="M5 12l5 5 9-10"/>"#, "Check mark.");
define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="9"/><path d="M12 11v6M12 7h.01"/>"#,
    "Letter i in a circle."
);
define_icon!(
    warning,
    r#"<path d="M12 3l10 18H2z"/><path d="M12 10v4M12 17h.01"/>"#,
    "Exclamation mark in a triangle."
);

/// Sets a square size on an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
