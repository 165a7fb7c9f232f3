// SPDX-License-Identifier: MPL-2.0
//! Calendar editor: toolbar, day sections and editable rows.
//!
//! This module follows the "state down, messages up" pattern. The editor owns
//! no calendar data: it renders the [`NewsList`] and [`CalendarSettings`] it
//! is handed and emits [`Message`]s that the application applies.

mod messages;
pub mod news_row;
mod toolbar;

pub use messages::{Message, RowMessage, ToolbarMessage};

use crate::domain::calendar::{CalendarSettings, NewsItem, NewsList, Weekday};
use crate::i18n::fluent::I18n;
use crate::infrastructure::FlagImages;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::widgets::{InlineEdit, Popovers};
use crate::ui::{icons, styles};
use iced::widget::{button, column, container, image, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length};
use std::collections::BTreeMap;

/// Flag images decoded for the editor's anchors and picker grid.
#[derive(Debug, Clone, Default)]
pub struct FlagThumbnails(BTreeMap<&'static str, image::Handle>);

impl FlagThumbnails {
    #[must_use]
    pub fn from_images(images: &FlagImages) -> Self {
        Self(
            images
                .iter()
                .map(|(code, bytes)| (code, image::Handle::from_bytes(bytes.as_ref().clone())))
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&image::Handle> {
        self.0.get(code)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub list: &'a NewsList,
    pub settings: &'a CalendarSettings,
    pub edit: &'a InlineEdit,
    pub popovers: &'a Popovers,
    pub thumbnails: &'a FlagThumbnails,
    /// An import dialog or parse is running.
    pub importing: bool,
}

/// Renders the editor panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let grouping = ctx.list.grouping();

    let mut sections = Column::new().spacing(spacing::MD);
    for (day, items) in grouping.iter() {
        sections = sections.push(day_section(&ctx, day, items));
    }

    let content = column![toolbar::view(&ctx), sections]
        .spacing(spacing::LG)
        .padding(spacing::MD);

    container(scrollable(content).height(Length::Fill))
        .width(Length::Fixed(sizing::EDITOR_PANEL_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn day_section<'a>(
    ctx: &ViewContext<'a>,
    day: Weekday,
    items: &[&'a NewsItem],
) -> Element<'a, Message> {
    let add = button(
        row![
            icons::sized(icons::plus(), sizing::ICON_SM),
            text(ctx.i18n.tr("editor-add-row")).size(typography::BODY_SM),
        ]
        .spacing(spacing::XXS)
        .align_y(Alignment::Center),
    )
    .on_press(Message::AddItem(day))
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::ghost);

    let header = container(
        row![
            text(ctx.i18n.tr(day_key(day))).size(typography::TITLE_SM),
            Space::new().width(Length::Fill),
            add,
        ]
        .align_y(Alignment::Center),
    )
    .padding([spacing::XXS, spacing::SM])
    .width(Length::Fill)
    .style(styles::container::day_header);

    let mut rows = Column::new().spacing(spacing::XS);
    if items.is_empty() {
        rows = rows.push(
            text(ctx.i18n.tr("editor-day-empty"))
                .size(typography::BODY_SM)
                .style(text::secondary),
        );
    }
    for &item in items {
        rows = rows.push(news_row::view(ctx, item));
    }

    column![header, rows.padding([0.0, spacing::XS])]
        .spacing(spacing::XS)
        .into()
}

/// Localization key of a day header.
fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "day-mon",
        Weekday::Tue => "day-tue",
        Weekday::Wed => "day-wed",
        Weekday::Thu => "day-thu",
        Weekday::Fri => "day-fri",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::sample;

    #[test]
    fn every_day_has_a_translated_header() {
        let i18n = I18n::default();
        for day in Weekday::ALL {
            assert!(!i18n.tr(day_key(day)).starts_with("MISSING:"), "{day:?}");
        }
    }

    #[test]
    fn view_renders_every_row_of_the_sample_week() {
        let i18n = I18n::default();
        let list = NewsList::from_entries(sample::sample_entries());
        let settings = CalendarSettings::default();
        let edit = InlineEdit::default();
        let popovers = Popovers::default();
        let thumbnails = FlagThumbnails::default();
        assert!(!list.is_empty());

        let _element = view(ViewContext {
            i18n: &i18n,
            list: &list,
            settings: &settings,
            edit: &edit,
            popovers: &popovers,
            thumbnails: &thumbnails,
            importing: false,
        });
    }

    #[test]
    fn thumbnails_follow_loaded_flags() {
        let mut images = FlagImages::default();
        images.insert("GB", vec![0x89, b'P', b'N', b'G']);

        let thumbnails = FlagThumbnails::from_images(&images);
        assert!(thumbnails.get("GB").is_some());
        assert!(thumbnails.get("USA").is_none());
    }
}
