// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::load_state::LoadedAssets;
use crate::application::import::ImportOutcome;
use crate::error::Error;
use crate::render::RenderedCard;
use crate::ui::{editor, notifications, preview};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(editor::Message),
    Preview(preview::Message),
    Notification(notifications::NotificationMessage),
    AssetsLoaded(LoadedAssets),
    /// A rasterization finished. Results of an older generation are stale.
    PreviewRendered {
        generation: u64,
        result: Result<RenderedCard, Error>,
    },
    /// Result from the CSV open dialog.
    ImportFileSelected(Option<PathBuf>),
    ImportCompleted(Result<ImportOutcome, Error>),
    /// Result from the PNG save dialog.
    ExportPathSelected(Option<PathBuf>),
    ExportCompleted(Result<PathBuf, Error>),
    /// Left button pressed anywhere in the window.
    PointerPressed,
    EscapePressed,
    Tick(Instant), // Spinner animation and toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `th`, `en-US`).
    pub lang: Option<String>,
    /// Optional CSV file imported on startup instead of the sample rows.
    pub csv_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ECON_CALENDAR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
