// SPDX-License-Identifier: MPL-2.0
//! Global presentation settings of the calendar card.

use super::newtypes::{TopMargin, VerticalPadding};

/// Visual theme of the exported card. Each theme pairs a font family with a
/// background treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundTheme {
    #[default]
    Thai,
    Lao,
}

impl BackgroundTheme {
    /// Returns the other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            BackgroundTheme::Thai => BackgroundTheme::Lao,
            BackgroundTheme::Lao => BackgroundTheme::Thai,
        }
    }

    /// Two-letter badge shown on the toggle button.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            BackgroundTheme::Thai => "TH",
            BackgroundTheme::Lao => "LA",
        }
    }
}

/// Which top-level view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Editing form next to the scaled preview.
    #[default]
    Editor,
    /// Full-size preview only, ready for export.
    Preview,
}

/// Presentation state shared by the editor and the preview.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSettings {
    /// Free text shown in the badge at the top of the card.
    pub date_range: String,
    pub vertical_padding: VerticalPadding,
    pub top_margin: TopMargin,
    pub background: BackgroundTheme,
    pub view_mode: ViewMode,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            date_range: String::from("22-26 May 2025"),
            vertical_padding: VerticalPadding::default(),
            top_margin: TopMargin::default(),
            background: BackgroundTheme::default(),
            view_mode: ViewMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_toggle_alternates() {
        let theme = BackgroundTheme::Thai;
        assert_eq!(theme.toggled(), BackgroundTheme::Lao);
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn defaults_start_in_editor_mode() {
        let settings = CalendarSettings::default();
        assert_eq!(settings.view_mode, ViewMode::Editor);
        assert_eq!(settings.top_margin, TopMargin::default());
    }
}
