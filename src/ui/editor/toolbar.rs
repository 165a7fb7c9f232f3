// SPDX-License-Identifier: MPL-2.0
//! Settings toolbar at the top of the editor panel.

use super::{Message, ToolbarMessage, ViewContext};
use crate::domain::calendar::newtypes::{margin_bounds, padding_bounds};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, column, row, slider, text, text_input, tooltip, Space, Text};
use iced::{Alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let settings = ctx.settings;

    let date_range = column![
        text(ctx.i18n.tr("editor-date-range")).size(typography::CAPTION),
        text_input(&ctx.i18n.tr("editor-date-range-placeholder"), &settings.date_range)
            .on_input(|value| ToolbarMessage::DateRangeChanged(value).into())
            .size(typography::BODY)
            .padding(spacing::XS),
    ]
    .spacing(spacing::XXS);

    let import_label = row![
        icons::sized(icons::upload(), sizing::ICON_SM),
        text(ctx.i18n.tr("editor-import-csv")).size(typography::BODY_SM),
    ]
    .spacing(spacing::XXS)
    .align_y(Alignment::Center);
    let import = button(import_label)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::unselected)
        .on_press_maybe((!ctx.importing).then_some(ToolbarMessage::Import.into()));

    let background = tooltip(
        button(text(settings.background.badge()).size(typography::BODY_SM))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::selected)
            .on_press(ToolbarMessage::ToggleBackground.into()),
        Text::new(ctx.i18n.tr("editor-toggle-background")),
        tooltip::Position::Bottom,
    )
    .gap(4);

    let preview = button(
        row![
            icons::sized(icons::eye(), sizing::ICON_SM),
            text(ctx.i18n.tr("editor-show-preview")).size(typography::BODY_SM),
        ]
        .spacing(spacing::XXS)
        .align_y(Alignment::Center),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::primary)
    .on_press(ToolbarMessage::ShowPreview.into());

    let actions = row![import, background, Space::new().width(Length::Fill), preview]
        .spacing(spacing::XS)
        .align_y(Alignment::Center);

    let padding_rem = settings.vertical_padding.rem();
    let padding_label = format!("{padding_rem:.1}");
    let padding = labeled_slider(
        ctx.i18n
            .tr_with_args("editor-vertical-padding", &[("value", padding_label.as_str())]),
        slider(
            padding_bounds::MIN_REM..=padding_bounds::MAX_REM,
            padding_rem,
            |value| ToolbarMessage::PaddingChanged(value).into(),
        )
        .step(padding_bounds::STEP_REM),
    );

    let margin_px = settings.top_margin.px();
    let margin_label = margin_px.to_string();
    let margin = labeled_slider(
        ctx.i18n
            .tr_with_args("editor-top-margin", &[("value", margin_label.as_str())]),
        slider(
            f32::from(margin_bounds::MIN_PX)..=f32::from(margin_bounds::MAX_PX),
            f32::from(margin_px),
            |value| ToolbarMessage::MarginChanged(value).into(),
        )
        .step(1.0),
    );

    column![date_range, actions, row![padding, margin].spacing(spacing::MD)]
        .spacing(spacing::SM)
        .into()
}

fn labeled_slider<'a>(
    label: String,
    slider: iced::widget::Slider<'a, f32, Message>,
) -> Element<'a, Message> {
    column![
        text(label).size(typography::CAPTION),
        slider.width(Length::Fixed(sizing::SLIDER_WIDTH)),
    ]
    .spacing(spacing::XXS)
    .into()
}
