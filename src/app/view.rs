// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::load_state::LoadState;
use super::Message;
use crate::domain::calendar::{CalendarSettings, NewsList, ViewMode};
use crate::i18n::fluent::I18n;
use crate::ui::editor::{self, FlagThumbnails};
use crate::ui::notifications::{self, Toast};
use crate::ui::preview::{self, PreviewImage};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::{InlineEdit, Popovers};
use iced::widget::{row, stack, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub load_state: &'a LoadState,
    pub list: &'a NewsList,
    pub settings: &'a CalendarSettings,
    pub edit: &'a InlineEdit,
    pub popovers: &'a Popovers,
    pub thumbnails: &'a FlagThumbnails,
    pub preview: Option<&'a PreviewImage>,
    pub notifications: &'a notifications::Manager,
    pub colors: ColorScheme,
    pub importing: bool,
    pub exporting: bool,
}

/// Renders the current application view based on the load state and the
/// view mode.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.load_state {
        LoadState::Loading { .. } => {
            preview::loading(ctx.i18n, ctx.load_state.elapsed(), ctx.colors.brand_primary)
                .map(Message::Preview)
        }
        LoadState::Failed(reason) => preview::load_failed(ctx.i18n, reason).map(Message::Preview),
        LoadState::Ready => match ctx.settings.view_mode {
            ViewMode::Editor => view_editor(&ctx),
            ViewMode::Preview => preview::full_page(ctx.preview, ctx.i18n, ctx.exporting)
                .map(Message::Preview),
        },
    };

    let content = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![content, toasts].into()
}

fn view_editor<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let editor_panel = editor::view(editor::ViewContext {
        i18n: ctx.i18n,
        list: ctx.list,
        settings: ctx.settings,
        edit: ctx.edit,
        popovers: ctx.popovers,
        thumbnails: ctx.thumbnails,
        importing: ctx.importing,
    })
    .map(Message::Editor);

    let preview_panel = preview::scaled(ctx.preview, ctx.i18n).map(Message::Preview);

    row![editor_panel, preview_panel]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
