// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every calendar mutation goes through [`App::update`]. After a message is
//! handled, the render inputs (list revision and card settings) are compared
//! with their previous values and a new rasterization is started when they
//! changed, so handlers never have to remember to refresh the preview.

use super::load_state::{load_assets, LoadState, LoadedAssets};
use super::{App, Message};
use crate::application::import::{import_from, ImportOutcome};
use crate::domain::calendar::{
    flags, sample, CalendarSettings, FieldUpdate, ItemId, TopMargin, VerticalPadding, ViewMode,
};
use crate::error::{Error, Result};
use crate::infrastructure::{CsvCalendarSource, FlagImages};
use crate::render::{rasterize, with_png_extension, CardRenderer, RenderAssets, RenderedCard};
use crate::ui::editor::{self, FlagThumbnails, RowMessage, ToolbarMessage};
use crate::ui::notifications::Notification;
use crate::ui::preview::{self, PreviewImage};
use crate::ui::widgets::inline_edit::{self, Commit};
use crate::ui::widgets::popover::{self, PopoverKind};
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// What the preview depends on. View mode is excluded: switching between
/// editor and preview shows the same card.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct RenderInputs {
    revision: u64,
    settings: CalendarSettings,
}

impl App {
    pub(super) fn render_inputs(&self) -> RenderInputs {
        RenderInputs {
            revision: self.list.revision(),
            settings: CalendarSettings {
                view_mode: ViewMode::Editor,
                ..self.settings.clone()
            },
        }
    }

    pub(super) fn dispatch(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(message) => self.handle_editor_message(message),
            Message::Preview(message) => self.handle_preview_message(message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::AssetsLoaded(assets) => self.handle_assets_loaded(assets),
            Message::PreviewRendered { generation, result } => {
                self.handle_preview_rendered(generation, result);
                Task::none()
            }
            Message::ImportFileSelected(path) => self.handle_import_file_selected(path),
            Message::ImportCompleted(result) => {
                self.handle_import_completed(result);
                Task::none()
            }
            Message::ExportPathSelected(path) => self.handle_export_path_selected(path),
            Message::ExportCompleted(result) => {
                self.handle_export_completed(result);
                Task::none()
            }
            Message::PointerPressed => {
                if let Some(commit) = self.edit.pointer_pressed() {
                    self.apply_commit(commit);
                }
                if self.popovers.pointer_pressed() {
                    tracing::trace!("popover closed by outside press");
                }
                Task::none()
            }
            Message::EscapePressed => {
                if let Some(target) = self.edit.discard() {
                    tracing::debug!(item = %target.item, field = ?target.field, "edit discarded");
                } else {
                    self.popovers.close();
                }
                Task::none()
            }
            Message::Tick(_instant) => {
                // Redraw for the spinner happens through the view; toasts expire here
                self.notifications.tick();
                Task::none()
            }
        }
    }

    // =========================================================================
    // Editor
    // =========================================================================

    fn handle_editor_message(&mut self, message: editor::Message) -> Task<Message> {
        match message {
            editor::Message::Toolbar(message) => self.handle_toolbar_message(message),
            editor::Message::Row(id, message) => {
                self.handle_row_message(id, message);
                Task::none()
            }
            editor::Message::AddItem(day) => {
                let entry = sample::new_row_entry(day, self.i18n.tr("editor-new-row-description"));
                let id = self.list.add_item(day, entry);
                tracing::debug!(item = %id, ?day, "row added");
                Task::none()
            }
            editor::Message::Edit(message) => self.handle_edit_message(message),
            editor::Message::Popover(message) => {
                self.handle_popover_message(message);
                Task::none()
            }
        }
    }

    fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Task<Message> {
        match message {
            ToolbarMessage::DateRangeChanged(value) => {
                self.settings.date_range = value;
                Task::none()
            }
            ToolbarMessage::Import => {
                if self.importing {
                    return Task::none();
                }
                self.importing = true;
                let dialog = rfd::AsyncFileDialog::new()
                    .set_title(self.i18n.tr("dialog-import-title"))
                    .add_filter("CSV", &["csv"]);
                Task::perform(
                    async move {
                        dialog
                            .pick_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::ImportFileSelected,
                )
            }
            ToolbarMessage::ToggleBackground => {
                self.settings.background = self.settings.background.toggled();
                Task::none()
            }
            ToolbarMessage::PaddingChanged(rem) => {
                self.settings.vertical_padding = VerticalPadding::new(rem);
                Task::none()
            }
            ToolbarMessage::MarginChanged(px) => {
                self.settings.top_margin = TopMargin::from_f32(px);
                Task::none()
            }
            ToolbarMessage::ShowPreview => {
                if let Some(commit) = self.edit.commit() {
                    self.apply_commit(commit);
                }
                self.popovers.close();
                self.settings.view_mode = ViewMode::Preview;
                Task::none()
            }
        }
    }

    fn handle_row_message(&mut self, id: ItemId, message: RowMessage) {
        let changed = match &message {
            RowMessage::SetImportance(importance) => {
                self.popovers.close();
                self.list
                    .update_field(id, FieldUpdate::Importance(*importance))
            }
            RowMessage::ToggleFlag(code) => match self.list.get(id) {
                Some(item) => {
                    let toggled = flags::toggle(&item.flags, code);
                    self.list.update_field(id, FieldUpdate::Flags(toggled))
                }
                None => false,
            },
            RowMessage::Duplicate => self.list.duplicate_item(id).is_some(),
            RowMessage::Remove => {
                self.edit.forget_item(id);
                self.popovers.forget_item(id);
                self.list.remove_item(id)
            }
        };
        if !changed {
            tracing::debug!(item = %id, ?message, "row message left the list unchanged");
        }
    }

    fn handle_edit_message(&mut self, message: inline_edit::Message) -> Task<Message> {
        match message {
            inline_edit::Message::Begin(target) => {
                let Some(committed) = self
                    .list
                    .get(target.item)
                    .map(|item| target.field.value_of(item).to_string())
                else {
                    tracing::debug!(item = %target.item, "edit requested for unknown item");
                    return Task::none();
                };
                if let Some(previous) = self.edit.begin(target, &committed) {
                    self.apply_commit(previous);
                }
                self.popovers.close();
                if target.field.is_multiline() {
                    Task::none()
                } else {
                    operation::focus(Id::new(inline_edit::INPUT_ID))
                }
            }
            inline_edit::Message::Input(value) => {
                self.edit.set_line(value);
                Task::none()
            }
            inline_edit::Message::Action(action) => {
                self.edit.perform(action);
                Task::none()
            }
            inline_edit::Message::Commit => {
                if let Some(commit) = self.edit.commit() {
                    self.apply_commit(commit);
                }
                Task::none()
            }
            inline_edit::Message::PointerEntered(target) => {
                self.edit.pointer_entered(target);
                Task::none()
            }
            inline_edit::Message::PointerLeft(target) => {
                self.edit.pointer_left(target);
                Task::none()
            }
        }
    }

    fn handle_popover_message(&mut self, message: popover::Message) {
        match message {
            popover::Message::Toggle(key) => {
                self.popovers.toggle(key);
                if key.kind == PopoverKind::Flags && self.thumbnails.is_empty() {
                    tracing::trace!("flag picker opened without flag images");
                }
            }
            popover::Message::Close => self.popovers.close(),
            popover::Message::PointerEntered(key) => self.popovers.pointer_entered(key),
            popover::Message::PointerLeft(key) => self.popovers.pointer_left(key),
        }
    }

    fn apply_commit(&mut self, commit: Commit) {
        let (id, update) = commit.into_update();
        if !self.list.update_field(id, update) {
            tracing::debug!(item = %id, "commit left the list unchanged");
        }
    }

    // =========================================================================
    // Preview and export
    // =========================================================================

    fn handle_preview_message(&mut self, message: preview::Message) -> Task<Message> {
        match message {
            preview::Message::BackToEditor => {
                self.settings.view_mode = ViewMode::Editor;
                Task::none()
            }
            preview::Message::Export => {
                if self.exporting || !self.load_state.is_ready() {
                    return Task::none();
                }
                self.exporting = true;
                let dialog = rfd::AsyncFileDialog::new()
                    .set_title(self.i18n.tr("dialog-export-title"))
                    .set_file_name(self.export_file_name.as_str())
                    .add_filter("PNG", &["png"]);
                Task::perform(
                    async move {
                        dialog
                            .save_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::ExportPathSelected,
                )
            }
            preview::Message::RetryAssets => {
                self.load_state = LoadState::loading();
                self.notifications.clear_matching("notification-assets-");
                Task::perform(load_assets(self.asset_request.clone()), Message::AssetsLoaded)
            }
            preview::Message::ContinueWithoutFlags => {
                tracing::info!("continuing without flag images");
                self.become_ready(&FlagImages::default())
            }
        }
    }

    fn handle_export_path_selected(&mut self, path: Option<PathBuf>) -> Task<Message> {
        let Some(path) = path else {
            self.exporting = false;
            return Task::none();
        };
        let Some(renderer) = self.renderer.as_mut() else {
            self.exporting = false;
            return Task::none();
        };
        let path = with_png_extension(path);
        let svg = renderer.document(&self.list, &self.settings);
        let fontdb = Arc::clone(renderer.assets().fontdb());
        Task::perform(
            run_blocking(move || export_png(&svg, &fontdb, path)),
            Message::ExportCompleted,
        )
    }

    fn handle_export_completed(&mut self, result: Result<PathBuf>) {
        self.exporting = false;
        match result {
            Ok(path) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.notifications.push(
                    Notification::success("notification-export-success")
                        .with_arg("file", file_name),
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "export failed");
                self.notifications
                    .push(Notification::from_error("notification-export-error", &err));
            }
        }
    }

    /// Builds the card document from the current state and rasterizes it in
    /// the background.
    pub(super) fn request_render(&mut self) -> Task<Message> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Task::none();
        };
        self.render_generation += 1;
        let generation = self.render_generation;
        let svg = renderer.document(&self.list, &self.settings);
        let fontdb = Arc::clone(renderer.assets().fontdb());
        Task::perform(
            run_blocking(move || rasterize(&svg, &fontdb)),
            move |result| Message::PreviewRendered { generation, result },
        )
    }

    fn handle_preview_rendered(&mut self, generation: u64, result: Result<RenderedCard>) {
        if generation != self.render_generation {
            tracing::trace!(generation, latest = self.render_generation, "stale render dropped");
            return;
        }
        match result {
            Ok(card) => self.preview = Some(PreviewImage::new(card)),
            Err(err) => {
                tracing::warn!(error = %err, "preview rendering failed");
                self.notifications
                    .push(Notification::from_error("notification-render-error", &err));
            }
        }
    }

    // =========================================================================
    // Assets
    // =========================================================================

    fn handle_assets_loaded(&mut self, assets: LoadedAssets) -> Task<Message> {
        self.background = assets.background;
        match assets.flags {
            Ok(flags) => self.become_ready(&flags),
            Err(err) => {
                self.notifications
                    .push(Notification::from_error("notification-assets-error", &err));
                self.load_state = LoadState::Failed(err.detail().to_string());
                Task::none()
            }
        }
    }

    /// Switches to `Ready` with the given flags and renders the first card.
    fn become_ready(&mut self, flags: &FlagImages) -> Task<Message> {
        let assets = RenderAssets::new(
            Arc::clone(&self.fontdb),
            flags,
            self.background.as_deref().map(Vec::as_slice),
        );
        self.thumbnails = FlagThumbnails::from_images(flags);
        self.renderer = Some(CardRenderer::new(assets));
        self.load_state = LoadState::Ready;
        self.request_render()
    }

    // =========================================================================
    // Import
    // =========================================================================

    fn handle_import_file_selected(&mut self, path: Option<PathBuf>) -> Task<Message> {
        match path {
            Some(path) => import_task(path),
            None => {
                self.importing = false;
                Task::none()
            }
        }
    }

    pub(super) fn handle_import_completed(&mut self, result: Result<ImportOutcome>) {
        self.importing = false;
        match result {
            Ok(outcome) if outcome.is_empty() => {
                tracing::info!(
                    unknown_day = outcome.unknown_day,
                    blank = outcome.blank,
                    "import produced no rows, list kept"
                );
                self.notifications
                    .push(Notification::info("notification-import-empty"));
            }
            Ok(outcome) => {
                let count = outcome.entries.len();
                self.edit.discard();
                self.popovers.close();
                self.list.replace_all(outcome.entries);
                tracing::info!(count, unknown_day = outcome.unknown_day, "calendar imported");
                self.notifications.push(
                    Notification::success("notification-import-success")
                        .with_arg("count", count.to_string()),
                );
                if outcome.unknown_day > 0 {
                    self.notifications.push(
                        Notification::warning("notification-import-skipped")
                            .with_arg("count", outcome.unknown_day.to_string()),
                    );
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "import failed, list kept");
                self.notifications
                    .push(Notification::from_error("notification-import-error", &err));
            }
        }
    }
}

/// Reads and converts a CSV file off the update loop.
pub(super) fn import_task(path: PathBuf) -> Task<Message> {
    tracing::info!(path = %path.display(), "importing calendar");
    Task::perform(
        run_blocking(move || import_from(&CsvCalendarSource::new(path))),
        Message::ImportCompleted,
    )
}

/// Runs rasterization and file work on the blocking pool so the executor
/// keeps serving UI events.
async fn run_blocking<T, F>(job: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

fn export_png(
    svg: &str,
    fontdb: &Arc<resvg::usvg::fontdb::Database>,
    path: PathBuf,
) -> Result<PathBuf> {
    let card = rasterize(svg, fontdb)?;
    card.save_png(&path)?;
    Ok(path)
}
