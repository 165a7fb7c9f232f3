// SPDX-License-Identifier: MPL-2.0
//! Text measuring port definition.

use crate::domain::calendar::BackgroundTheme;

/// Font settings a piece of text is measured with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// The card theme selects the font family.
    pub theme: BackgroundTheme,
    pub font_size: f32,
    pub bold: bool,
}

/// Measures the rendered advance width of a single line of text.
///
/// Implementations must be deterministic: the same text, style and spacing
/// always yield the same width.
pub trait TextMeasure: Send + Sync {
    /// Width in pixels of `text` drawn with `style`, with `letter_spacing`
    /// pixels added after every character.
    fn text_width(&self, text: &str, style: TextStyle, letter_spacing: f32) -> f32;
}
