// SPDX-License-Identifier: MPL-2.0
//! Startup assets: flag images from the flag CDN and the optional background
//! image from disk.

use crate::domain::reference;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Encoded flag images keyed by country code (`USA`, `GB`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagImages(BTreeMap<&'static str, Arc<Vec<u8>>>);

impl FlagImages {
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Arc<Vec<u8>>> {
        self.0.get(code)
    }

    pub fn insert(&mut self, code: &'static str, bytes: Vec<u8>) {
        self.0.insert(code, Arc::new(bytes));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Arc<Vec<u8>>)> {
        self.0.iter().map(|(code, bytes)| (*code, bytes))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Downloads the image of every known flag from `base_url`.
///
/// All flags are fetched concurrently. The first failure aborts the whole
/// load so that the caller can offer a retry.
///
/// # Errors
///
/// Returns [`Error::Network`] when a request fails, times out or answers
/// with a non-success status.
pub async fn fetch_flags(base_url: &str, timeout: Duration) -> Result<FlagImages> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("EconCalendar/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;

    let requests = reference::known_flag_codes().filter_map(|code| {
        let url = reference::flag_url(base_url, code)?;
        let client = client.clone();
        Some(async move { (code, fetch_one(&client, &url).await) })
    });

    let mut flags = FlagImages::default();
    for (code, result) in futures_util::future::join_all(requests).await {
        flags.insert(code, result?);
    }
    tracing::info!(count = flags.len(), base_url, "flag images loaded");
    Ok(flags)
}

async fn fetch_one(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "{url}: HTTP status {}",
            response.status()
        )));
    }
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// Candidate locations of a configured background image, in lookup order.
///
/// Absolute paths are used as is. Relative paths are looked up in the
/// configuration directory first, then in the working directory.
#[must_use]
pub fn background_candidates(configured: &Path, config_dir: Option<&Path>) -> Vec<PathBuf> {
    if configured.is_absolute() {
        return vec![configured.to_path_buf()];
    }
    let mut candidates = Vec::with_capacity(2);
    if let Some(dir) = config_dir {
        candidates.push(dir.join(configured));
    }
    candidates.push(configured.to_path_buf());
    candidates
}

/// Reads the first existing background candidate.
///
/// A missing background is not an error: the card falls back to the theme
/// gradient. Returns `Ok(None)` in that case.
///
/// # Errors
///
/// Returns [`Error::Io`] when a candidate exists but cannot be read.
pub fn read_background(configured: &Path, config_dir: Option<&Path>) -> Result<Option<Vec<u8>>> {
    for candidate in background_candidates(configured, config_dir) {
        match std::fs::read(&candidate) {
            Ok(bytes) => {
                tracing::info!(path = %candidate.display(), "background image loaded");
                return Ok(Some(bytes));
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
    }
    tracing::info!(
        path = %configured.display(),
        "background image not found, using theme gradient"
    );
    Ok(None)
}
