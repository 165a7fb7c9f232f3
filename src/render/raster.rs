// SPDX-License-Identifier: MPL-2.0
//! Rasterization of card documents and PNG export.
//!
//! Documents are parsed with `usvg`, drawn with `resvg` onto a `tiny-skia`
//! pixmap, and written to disk through the `image` crate.

use super::document::{CARD_HEIGHT, CARD_WIDTH};
use crate::error::{Error, Result};
use image_rs::{ImageBuffer, ImageFormat, Rgba};
use resvg::usvg::{self, fontdb};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A rasterized card, straight (non-premultiplied) RGBA.
///
/// The pixels sit behind an `Arc`, so clones of a card share one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub rgba: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

impl RenderedCard {
    /// Writes the card as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel buffer is inconsistent or the file
    /// cannot be written.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let img: ImageBuffer<Rgba<u8>, _> =
            ImageBuffer::from_raw(self.width, self.height, (*self.rgba).clone()).ok_or_else(
                || Error::Render("Failed to create image buffer from card pixels".to_string()),
            )?;
        img.save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::Io(format!("Failed to save card: {e}")))?;
        tracing::info!(path = %path.display(), "card exported");
        Ok(())
    }
}

/// Rasterizes a card document at its native 960×1200 size.
///
/// # Errors
///
/// Returns [`Error::Render`] if the document cannot be parsed.
pub fn rasterize(svg: &str, fontdb: &Arc<fontdb::Database>) -> Result<RenderedCard> {
    let mut options = usvg::Options::default();
    options.fontdb = Arc::clone(fontdb);
    let tree = usvg::Tree::from_str(svg, &options)?;

    let mut pixmap = tiny_skia::Pixmap::new(CARD_WIDTH, CARD_HEIGHT)
        .ok_or_else(|| Error::Render("Failed to allocate card pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    Ok(RenderedCard {
        rgba: Arc::new(rgba),
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
    })
}

/// Returns `path` with a `.png` extension, replacing any other extension.
#[must_use]
pub fn with_png_extension(path: PathBuf) -> PathBuf {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        path
    } else {
        path.with_extension("png")
    }
}
