// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the editor and the preview.
//!
//! The `App` struct owns the calendar list and the card settings, wires them
//! to the editor and preview views, and translates messages into side effects
//! such as asset loading, CSV import, rendering and PNG export.

pub mod config;
mod load_state;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use load_state::{AssetRequest, LoadState, LoadedAssets};
pub use message::{Flags, Message};

use crate::domain::calendar::{sample, CalendarSettings, NewsList};
use crate::i18n::fluent::I18n;
use crate::render::{fonts, CardRenderer};
use crate::ui::editor::FlagThumbnails;
use crate::ui::notifications::{self, Notification};
use crate::ui::preview::PreviewImage;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::{InlineEdit, Popovers};
use iced::{window, Element, Subscription, Task, Theme};
use resvg::usvg::fontdb;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1600;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 1000;
pub const MIN_WINDOW_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 700;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    list: NewsList,
    settings: CalendarSettings,
    edit: InlineEdit,
    popovers: Popovers,
    load_state: LoadState,
    /// Fonts available to the card, loaded once at startup.
    fontdb: Arc<fontdb::Database>,
    /// Background image bytes, kept across asset retries.
    background: Option<Arc<Vec<u8>>>,
    thumbnails: FlagThumbnails,
    /// Present once the assets are settled.
    renderer: Option<CardRenderer>,
    preview: Option<PreviewImage>,
    /// Incremented for every render request; older results are dropped.
    render_generation: u64,
    importing: bool,
    exporting: bool,
    theme_mode: ThemeMode,
    asset_request: AssetRequest,
    export_file_name: String,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.list.len())
            .field("settings", &self.settings)
            .field("load_state", &self.load_state)
            .field("render_generation", &self.render_generation)
            .field("importing", &self.importing)
            .field("exporting", &self.exporting)
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            list: NewsList::from_entries(sample::sample_entries()),
            settings: config.initial_settings(),
            edit: InlineEdit::default(),
            popovers: Popovers::default(),
            load_state: LoadState::loading(),
            fontdb: Arc::new(fontdb::Database::new()),
            background: None,
            thumbnails: FlagThumbnails::default(),
            renderer: None,
            preview: None,
            render_generation: 0,
            importing: false,
            exporting: false,
            theme_mode: ThemeMode::System,
            asset_request: AssetRequest::from_config(&config, None),
            export_file_name: config.export_file_name().to_string(),
            notifications: notifications::Manager::new(),
        }
    }
}

#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state, then starts the asset task and, when a
    /// CSV path was given on the command line, its import.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        // Must run before anything reads the config directory
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let fontdb = fonts::load_database(config.assets.font_dir.as_deref());
        tracing::info!(faces = fontdb.len(), "fonts loaded");

        let mut app = App {
            i18n,
            settings: config.initial_settings(),
            fontdb,
            theme_mode: config.general.theme_mode,
            asset_request: AssetRequest::from_config(&config, paths::get_app_config_dir()),
            export_file_name: config.export_file_name().to_string(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let mut tasks = vec![Task::perform(
            load_state::load_assets(app.asset_request.clone()),
            Message::AssetsLoaded,
        )];

        if let Some(path) = flags.csv_path {
            app.importing = true;
            tasks.push(update::import_task(PathBuf::from(path)));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let base = self.i18n.tr("window-title");
        if self.settings.date_range.trim().is_empty() {
            base
        } else {
            format!("{} - {}", self.settings.date_range.trim(), base)
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let dismiss_sub = subscription::create_dismiss_subscription(
            self.edit.is_editing() || self.popovers.any_open(),
        );
        let tick_sub = subscription::create_tick_subscription(
            self.load_state.is_loading(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([dismiss_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let before = self.render_inputs();
        let task = self.dispatch(message);
        if self.render_inputs() == before {
            task
        } else {
            Task::batch([task, self.request_render()])
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            load_state: &self.load_state,
            list: &self.list,
            settings: &self.settings,
            edit: &self.edit,
            popovers: &self.popovers,
            thumbnails: &self.thumbnails,
            preview: self.preview.as_ref(),
            notifications: &self.notifications,
            colors: self.theme_mode.colors(),
            importing: self.importing,
            exporting: self.exporting,
        })
    }
}
