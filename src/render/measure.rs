// SPDX-License-Identifier: MPL-2.0
//! Text measuring through `usvg`'s text layout.

use super::document::escape_xml;
use super::fonts;
use crate::application::port::{TextMeasure, TextStyle};
use resvg::usvg::{self, fontdb};
use std::sync::Arc;

/// Measures text by laying it out in a one-line SVG document with the same
/// font database the card is rasterized with.
#[derive(Clone)]
pub struct SvgTextMeasure {
    fontdb: Arc<fontdb::Database>,
}

impl std::fmt::Debug for SvgTextMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgTextMeasure")
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl SvgTextMeasure {
    #[must_use]
    pub fn new(fontdb: Arc<fontdb::Database>) -> Self {
        Self { fontdb }
    }
}

impl TextMeasure for SvgTextMeasure {
    fn text_width(&self, text: &str, style: TextStyle, letter_spacing: f32) -> f32 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let svg = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="8000" height="200" xml:space="preserve">"#,
                r#"<text x="0" y="100" font-family="{family}" font-size="{size}" font-weight="{weight}" letter-spacing="{spacing}">{text}</text>"#,
                "</svg>"
            ),
            family = escape_xml(&fonts::font_stack(style.theme)),
            size = style.font_size,
            weight = if style.bold { 700 } else { 400 },
            spacing = letter_spacing,
            text = escape_xml(text),
        );

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);
        match usvg::Tree::from_str(&svg, &options) {
            Ok(tree) if tree.root().has_children() => tree.root().abs_bounding_box().width(),
            Ok(_) => 0.0,
            Err(err) => {
                tracing::debug!(%err, "text measurement failed");
                0.0
            }
        }
    }
}
