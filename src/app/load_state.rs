// SPDX-License-Identifier: MPL-2.0
//! Startup loading of the card assets.
//!
//! Fonts are loaded synchronously when the application boots; flag images
//! and the background image are fetched by one asynchronous task whose
//! outcome moves [`LoadState`] from `Loading` to `Ready` or `Failed`.

use super::config::Config;
use crate::error::Result;
use crate::infrastructure::{fetch_flags, read_background, FlagImages};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Whether the card can be rendered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading { started: Instant },
    Ready,
    /// Flag images could not be loaded; the reason is shown to the user.
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn loading() -> Self {
        LoadState::Loading {
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    /// Time spent loading so far, zero outside of `Loading`.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self {
            LoadState::Loading { started } => started.elapsed(),
            _ => Duration::ZERO,
        }
    }
}

/// Everything the asset task needs, detached from the application state.
#[derive(Debug, Clone)]
pub struct AssetRequest {
    pub flag_base_url: String,
    pub timeout: Duration,
    pub background_image: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
}

impl AssetRequest {
    #[must_use]
    pub fn from_config(config: &Config, config_dir: Option<PathBuf>) -> Self {
        Self {
            flag_base_url: config.flag_base_url().to_string(),
            timeout: config.request_timeout(),
            background_image: config.assets.background_image.clone(),
            config_dir,
        }
    }
}

/// Outcome of the asset task.
///
/// The background is independent of the flags: it is kept even when the
/// flags fail so that "continue without flags" still shows it.
#[derive(Debug, Clone)]
pub struct LoadedAssets {
    pub flags: Result<FlagImages>,
    pub background: Option<Arc<Vec<u8>>>,
}

/// Fetches the flag images and reads the background image.
pub async fn load_assets(request: AssetRequest) -> LoadedAssets {
    let flags = fetch_flags(&request.flag_base_url, request.timeout).await;
    if let Err(err) = &flags {
        tracing::warn!(error = %err, "flag images could not be loaded");
    }

    let background = match &request.background_image {
        Some(path) => match read_background(path, request.config_dir.as_deref()) {
            Ok(bytes) => bytes.map(Arc::new),
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "background image unreadable");
                None
            }
        },
        None => None,
    };

    LoadedAssets { flags, background }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_reports_elapsed_time() {
        let state = LoadState::Loading {
            started: Instant::now() - Duration::from_millis(250),
        };
        assert!(state.is_loading());
        assert!(state.elapsed() >= Duration::from_millis(250));
    }

    #[test]
    fn settled_states_have_no_elapsed_time() {
        assert_eq!(LoadState::Ready.elapsed(), Duration::ZERO);
        assert_eq!(LoadState::Failed("offline".into()).elapsed(), Duration::ZERO);
        assert!(LoadState::Ready.is_ready());
    }

    #[test]
    fn request_uses_configured_assets() {
        let mut config = Config::default();
        config.assets.flag_base_url = Some("http://localhost/flags".into());
        config.assets.request_timeout_secs = Some(3);

        let request = AssetRequest::from_config(&config, None);
        assert_eq!(request.flag_base_url, "http://localhost/flags");
        assert_eq!(request.timeout, Duration::from_secs(3));
        assert_eq!(request.background_image, Some(PathBuf::from("bg.jpg")));
    }
}
