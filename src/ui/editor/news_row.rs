// SPDX-License-Identifier: MPL-2.0
//! One editable news row.
//!
//! The row combines two popovers (importance marker, flag picker) with three
//! inline-edit fields and the duplicate/remove actions.

use super::{FlagThumbnails, Message, RowMessage, ViewContext};
use crate::domain::calendar::{flags, Importance, NewsItem};
use crate::domain::reference::{self, COUNTRIES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::widgets::inline_edit::{self, EditField, EditTarget, FieldStyle};
use crate::ui::widgets::popover::{self, PopoverKey, PopoverKind};
use crate::ui::{icons, styles};
use iced::widget::{button, column, image, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

/// Flags shown on the anchor before the picker is opened.
pub const ANCHOR_FLAGS: usize = 2;

pub fn view<'a>(ctx: &ViewContext<'a>, item: &'a NewsItem) -> Element<'a, Message> {
    let importance = popover::view(
        PopoverKey::new(item.id, PopoverKind::Importance),
        ctx.popovers,
        marker(item),
        || importance_panel(ctx.i18n, item),
        Message::Popover,
    );

    let flag_picker = popover::view(
        PopoverKey::new(item.id, PopoverKind::Flags),
        ctx.popovers,
        flag_anchor(ctx.thumbnails, item),
        || flag_panel(ctx, item),
        Message::Popover,
    );

    let time = field(
        ctx,
        item,
        EditField::Time,
        Length::Fixed(sizing::TIME_FIELD_WIDTH),
        "editor-time-placeholder",
    );
    let description = field(
        ctx,
        item,
        EditField::Description,
        Length::Fill,
        "editor-description-placeholder",
    );
    let value = field(
        ctx,
        item,
        EditField::Value,
        Length::Fixed(sizing::VALUE_FIELD_WIDTH),
        "editor-value-placeholder",
    );

    let duplicate = button(icons::sized(icons::copy(), sizing::ICON_SM))
        .padding(spacing::XXS)
        .style(styles::button::ghost)
        .on_press(Message::Row(item.id, RowMessage::Duplicate));
    let remove = button(icons::sized(icons::trash(), sizing::ICON_SM))
        .padding(spacing::XXS)
        .style(styles::button::danger)
        .on_press(Message::Row(item.id, RowMessage::Remove));

    row![
        importance,
        flag_picker,
        time,
        description,
        value,
        duplicate,
        remove
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Start)
    .into()
}

fn field<'a>(
    ctx: &ViewContext<'a>,
    item: &'a NewsItem,
    field: EditField,
    width: Length,
    placeholder_key: &str,
) -> Element<'a, Message> {
    inline_edit::view(
        ctx.edit,
        EditTarget::new(item.id, field),
        field.value_of(item),
        FieldStyle {
            width,
            placeholder: ctx.i18n.tr(placeholder_key),
        },
    )
    .map(Message::Edit)
}

fn marker<'a>(item: &NewsItem) -> Element<'a, Message> {
    let meta = reference::importance_meta(item.importance);
    button(
        Space::new()
            .width(Length::Fixed(sizing::MARKER_BUTTON))
            .height(Length::Fixed(sizing::MARKER_BUTTON)),
    )
    .padding(0)
    .style(styles::button::marker(meta.fill, meta.stroke))
    .on_press(Message::Popover(popover::Message::Toggle(PopoverKey::new(
        item.id,
        PopoverKind::Importance,
    ))))
    .into()
}

fn importance_panel<'a>(i18n: &I18n, item: &NewsItem) -> Element<'a, Message> {
    let mut options = Column::new().spacing(spacing::XXS);
    for importance in Importance::ALL {
        let meta = reference::importance_meta(importance);
        let dot = button(
            Space::new()
                .width(Length::Fixed(sizing::ICON_SM))
                .height(Length::Fixed(sizing::ICON_SM)),
        )
        .padding(0)
        .style(styles::button::marker(meta.fill, meta.stroke));
        let style = if importance == item.importance {
            styles::button::selected
        } else {
            styles::button::ghost
        };
        options = options.push(
            button(
                row![dot, text(i18n.tr(meta.label_key)).size(typography::BODY_SM)]
                    .spacing(spacing::XS)
                    .align_y(Alignment::Center),
            )
            .width(Length::Fixed(sizing::IMPORTANCE_PANEL_WIDTH))
            .padding([spacing::XXS, spacing::XS])
            .style(style)
            .on_press(Message::Row(item.id, RowMessage::SetImportance(importance))),
        );
    }
    options.into()
}

/// Codes shown on the anchor: the known codes among the first
/// [`ANCHOR_FLAGS`] stored ones.
#[must_use]
pub fn anchor_codes(flags: &str) -> Vec<&str> {
    flags::codes(flags)
        .take(ANCHOR_FLAGS)
        .filter(|code| reference::flag_cdn_code(code).is_some())
        .collect()
}

fn flag_badge<'a>(thumbnails: &FlagThumbnails, code: &str, size: f32) -> Element<'a, Message> {
    match thumbnails.get(code) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size * 0.75))
            .into(),
        None => text(code.to_string()).size(typography::CAPTION).into(),
    }
}

fn flag_anchor<'a>(thumbnails: &FlagThumbnails, item: &NewsItem) -> Element<'a, Message> {
    let codes = anchor_codes(&item.flags);
    let content: Element<'a, Message> = if codes.is_empty() {
        icons::sized(icons::plus(), sizing::ICON_SM).into()
    } else {
        Row::with_children(
            codes
                .into_iter()
                .map(|code| flag_badge(thumbnails, code, sizing::ICON_MD)),
        )
        .spacing(spacing::XXS)
        .align_y(Alignment::Center)
        .into()
    };

    button(content)
        .width(Length::Fixed(sizing::FLAG_ANCHOR_WIDTH))
        .padding(spacing::XXS)
        .style(styles::button::unselected)
        .on_press(Message::Popover(popover::Message::Toggle(PopoverKey::new(
            item.id,
            PopoverKind::Flags,
        ))))
        .into()
}

fn flag_panel<'a>(ctx: &ViewContext<'a>, item: &NewsItem) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::XXS);
    for chunk in COUNTRIES.chunks(sizing::FLAG_GRID_COLUMNS) {
        let mut cells = Row::new().spacing(spacing::XXS);
        for country in chunk {
            let style = if flags::contains(&item.flags, country.code) {
                styles::button::selected
            } else {
                styles::button::ghost
            };
            let cell = column![
                flag_badge(ctx.thumbnails, country.code, sizing::ICON_LG),
                text(ctx.i18n.tr(country.name_key)).size(typography::CAPTION),
            ]
            .spacing(spacing::XXS)
            .align_x(Alignment::Center);
            cells = cells.push(
                button(cell)
                    .width(Length::Fixed(sizing::FLAG_CELL_WIDTH))
                    .padding(spacing::XXS)
                    .style(style)
                    .on_press(Message::Row(item.id, RowMessage::ToggleFlag(country.code))),
            );
        }
        grid = grid.push(cells);
    }
    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_shows_at_most_two_flags() {
        assert_eq!(anchor_codes("GB,USA,JP"), vec!["GB", "USA"]);
    }

    #[test]
    fn anchor_skips_unknown_codes() {
        assert_eq!(anchor_codes("XX,NZ"), vec!["NZ"]);
        assert!(anchor_codes("XX,YY,NZ").is_empty());
        assert!(anchor_codes("").is_empty());
    }

    #[test]
    fn every_country_has_a_translated_name() {
        let i18n = I18n::default();
        for country in COUNTRIES {
            assert!(
                !i18n.tr(country.name_key).starts_with("MISSING:"),
                "{}",
                country.code
            );
        }
    }
}
