// SPDX-License-Identifier: MPL-2.0
//! Rendering of the calendar card.
//!
//! The card is produced as an SVG document ([`document`]) and rasterized with
//! `resvg` ([`raster`]). [`CardRenderer`] ties the pieces together and keeps
//! the state that should survive between two renders: the loaded assets and
//! the letter-spacing cache.

pub mod assets;
pub mod document;
pub mod fit;
pub mod fonts;
pub mod measure;
pub mod raster;

pub use assets::RenderAssets;
pub use document::{build_document, CARD_HEIGHT, CARD_WIDTH};
pub use fit::FitCache;
pub use measure::SvgTextMeasure;
pub use raster::{rasterize, with_png_extension, RenderedCard};

use crate::domain::calendar::{CalendarSettings, NewsList};
use crate::error::Result;

/// Builds and rasterizes cards from the calendar state.
#[derive(Debug)]
pub struct CardRenderer {
    assets: RenderAssets,
    measure: SvgTextMeasure,
    fit: FitCache,
}

impl CardRenderer {
    #[must_use]
    pub fn new(assets: RenderAssets) -> Self {
        let measure = SvgTextMeasure::new(assets.fontdb().clone());
        Self {
            assets,
            measure,
            fit: FitCache::default(),
        }
    }

    #[must_use]
    pub fn assets(&self) -> &RenderAssets {
        &self.assets
    }

    /// Builds the SVG document of the current state.
    pub fn document(&mut self, list: &NewsList, settings: &CalendarSettings) -> String {
        build_document(
            &list.grouping(),
            settings,
            &self.assets,
            &mut self.fit,
            &self.measure,
        )
    }

    /// Builds and rasterizes the current state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::error::Error::Render) if the
    /// document cannot be rasterized.
    pub fn render(&mut self, list: &NewsList, settings: &CalendarSettings) -> Result<RenderedCard> {
        let svg = self.document(list, settings);
        rasterize(&svg, self.assets.fontdb())
    }
}
