// SPDX-License-Identifier: MPL-2.0
//! Images and fonts the card document refers to.

use crate::infrastructure::FlagImages;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image_rs::ImageFormat;
use resvg::usvg::fontdb;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything the document builder embeds, pre-encoded as data URLs so that
/// building a document never touches the network or the disk.
#[derive(Clone)]
pub struct RenderAssets {
    fontdb: Arc<fontdb::Database>,
    flags: BTreeMap<&'static str, String>,
    background: Option<String>,
}

impl RenderAssets {
    /// Encodes the loaded images. Images in a format the rasterizer cannot
    /// decode are dropped with a warning.
    #[must_use]
    pub fn new(
        fontdb: Arc<fontdb::Database>,
        flags: &FlagImages,
        background: Option<&[u8]>,
    ) -> Self {
        let flags = flags
            .iter()
            .filter_map(|(code, bytes)| {
                let url = data_url(bytes);
                if url.is_none() {
                    tracing::warn!(code, "flag image has an unsupported format");
                }
                url.map(|url| (code, url))
            })
            .collect();
        let background = background.and_then(|bytes| {
            let url = data_url(bytes);
            if url.is_none() {
                tracing::warn!("background image has an unsupported format");
            }
            url
        });
        Self {
            fontdb,
            flags,
            background,
        }
    }

    /// Assets without any image: no flags, gradient background.
    #[must_use]
    pub fn fonts_only(fontdb: Arc<fontdb::Database>) -> Self {
        Self {
            fontdb,
            flags: BTreeMap::new(),
            background: None,
        }
    }

    #[must_use]
    pub fn fontdb(&self) -> &Arc<fontdb::Database> {
        &self.fontdb
    }

    /// Data URL of the flag image for `code`, if it was loaded.
    #[must_use]
    pub fn flag(&self, code: &str) -> Option<&str> {
        self.flags.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }

    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }
}

impl std::fmt::Debug for RenderAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderAssets")
            .field("font_faces", &self.fontdb.len())
            .field("flags", &self.flags.keys().collect::<Vec<_>>())
            .field("background", &self.background.is_some())
            .finish()
    }
}

fn data_url(bytes: &[u8]) -> Option<String> {
    let mime = match image_rs::guess_format(bytes).ok()? {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        _ => return None,
    };
    Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
