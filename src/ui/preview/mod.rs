// SPDX-License-Identifier: MPL-2.0
//! Card preview: the scaled panel next to the editor, the full-size export
//! screen, and the placeholders shown while the card assets load.

pub mod scale_fit;

use crate::i18n::fluent::I18n;
use crate::render::{RenderedCard, CARD_HEIGHT, CARD_WIDTH};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::widgets::Spinner;
use crate::ui::{icons, styles};
use iced::widget::{
    button, center, column, container, image, responsive, row, scrollable, text, Space,
};
use iced::{Alignment, Color, Element, Length, Size};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    BackToEditor,
    Export,
    RetryAssets,
    ContinueWithoutFlags,
}

/// On-screen handle of the latest rasterized card.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    handle: image::Handle,
}

impl PreviewImage {
    /// Moves the card pixels into an image handle. They are only copied when
    /// another clone of the card still holds them.
    #[must_use]
    pub fn new(card: RenderedCard) -> Self {
        let RenderedCard {
            rgba,
            width,
            height,
        } = card;
        let pixels = Arc::try_unwrap(rgba).unwrap_or_else(|shared| shared.as_ref().clone());
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
        }
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }
}

/// Preview next to the editor, shrunk to the available width.
pub fn scaled<'a>(preview: Option<&'a PreviewImage>, i18n: &I18n) -> Element<'a, Message> {
    let Some(preview) = preview else {
        return rendering(i18n);
    };
    let handle = preview.handle().clone();

    responsive(move |available: Size| {
        let size = scale_fit::scaled_size((available.width - 2.0 * spacing::MD).max(0.0));
        container(
            image(handle.clone())
                .width(Length::Fixed(size.width))
                .height(Length::Fixed(size.height)),
        )
        .padding(spacing::MD)
        .center_x(Length::Fill)
        .into()
    })
    .into()
}

/// Full-size preview with the export action.
pub fn full_page<'a>(
    preview: Option<&'a PreviewImage>,
    i18n: &I18n,
    exporting: bool,
) -> Element<'a, Message> {
    let back = button(
        row![
            icons::sized(icons::arrow_left(), sizing::ICON_SM),
            text(i18n.tr("preview-back")).size(typography::BODY_SM),
        ]
        .spacing(spacing::XXS)
        .align_y(Alignment::Center),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::unselected)
    .on_press(Message::BackToEditor);

    let export_label = if exporting {
        i18n.tr("preview-exporting")
    } else {
        i18n.tr("preview-save-png")
    };
    let export = button(
        row![
            icons::sized(icons::download(), sizing::ICON_SM),
            text(export_label).size(typography::BODY_SM),
        ]
        .spacing(spacing::XXS)
        .align_y(Alignment::Center),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::primary)
    .on_press_maybe((preview.is_some() && !exporting).then_some(Message::Export));

    let header = row![back, Space::new().width(Length::Fill), export]
        .align_y(Alignment::Center)
        .padding(spacing::SM);

    let body: Element<'a, Message> = match preview {
        Some(preview) => scrollable(
            container(
                image(preview.handle().clone())
                    .width(Length::Fixed(CARD_WIDTH as f32))
                    .height(Length::Fixed(CARD_HEIGHT as f32)),
            )
            .padding(spacing::MD)
            .center_x(Length::Fill),
        )
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::default(),
            horizontal: scrollable::Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => rendering(i18n),
    };

    column![header, body].into()
}

fn rendering<'a>(i18n: &I18n) -> Element<'a, Message> {
    center(text(i18n.tr("preview-rendering")).size(typography::BODY).style(text::secondary))
        .style(styles::container::preview_frame)
        .into()
}

/// Shown while fonts, flags and the background load.
pub fn loading<'a>(i18n: &I18n, elapsed: Duration, color: Color) -> Element<'a, Message> {
    center(
        column![
            Spinner::new(color, elapsed).into_element(),
            text(i18n.tr("loading-assets")).size(typography::BODY),
        ]
        .spacing(spacing::MD)
        .align_x(Alignment::Center),
    )
    .into()
}

/// Shown when the card assets could not be loaded.
pub fn load_failed<'a>(i18n: &I18n, reason: &str) -> Element<'a, Message> {
    let retry = button(
        row![
            icons::sized(icons::refresh(), sizing::ICON_SM),
            text(i18n.tr("loading-retry")).size(typography::BODY_SM),
        ]
        .spacing(spacing::XXS)
        .align_y(Alignment::Center),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::primary)
    .on_press(Message::RetryAssets);

    let skip = button(text(i18n.tr("loading-continue-without-flags")).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::ContinueWithoutFlags);

    center(
        column![
            icons::sized(icons::warning(), sizing::ICON_LG),
            text(i18n.tr("loading-failed")).size(typography::TITLE_SM),
            text(reason.to_string())
                .size(typography::BODY_SM)
                .style(text::secondary),
            row![retry, skip].spacing(spacing::SM),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_image_reuses_unshared_pixels() {
        let pixels = vec![0; 16];
        let address = pixels.as_ptr();
        let card = RenderedCard {
            rgba: Arc::new(pixels),
            width: 2,
            height: 2,
        };

        let preview = PreviewImage::new(card);
        match preview.handle() {
            image::Handle::Rgba {
                width,
                height,
                pixels,
                ..
            } => {
                assert_eq!((*width, *height), (2, 2));
                assert_eq!(pixels.as_ptr(), address);
            }
            other => panic!("expected RGBA handle, got {other:?}"),
        }
    }

    #[test]
    fn preview_labels_are_translated() {
        let i18n = I18n::default();
        for key in [
            "preview-back",
            "preview-save-png",
            "preview-exporting",
            "preview-rendering",
            "loading-assets",
            "loading-failed",
            "loading-retry",
            "loading-continue-without-flags",
        ] {
            assert!(!i18n.tr(key).starts_with("MISSING:"), "{key}");
        }
    }
}
