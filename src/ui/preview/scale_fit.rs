// SPDX-License-Identifier: MPL-2.0
//! Uniform shrink of the card to the width available next to the editor.

use crate::render::{CARD_HEIGHT, CARD_WIDTH};
use iced::Size;

/// Scale factor that fits the card into `available_width`.
///
/// The card is never enlarged, and widths at or below zero shrink it to
/// nothing. Non-finite widths leave the card at full size.
#[must_use]
pub fn scale_for_width(available_width: f32) -> f32 {
    if !available_width.is_finite() {
        return 1.0;
    }
    (available_width / CARD_WIDTH as f32).clamp(0.0, 1.0)
}

/// On-screen size of the card at [`scale_for_width`].
#[must_use]
pub fn scaled_size(available_width: f32) -> Size {
    let scale = scale_for_width(available_width);
    Size::new(CARD_WIDTH as f32 * scale, CARD_HEIGHT as f32 * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn narrow_containers_shrink_the_card() {
        assert_relative_eq!(scale_for_width(480.0), 0.5);
    }

    #[test]
    fn wide_containers_never_enlarge() {
        assert_relative_eq!(scale_for_width(960.0), 1.0);
        assert_relative_eq!(scale_for_width(2400.0), 1.0);
    }

    #[test]
    fn non_finite_widths_fall_back_to_full_size() {
        assert_relative_eq!(scale_for_width(f32::NAN), 1.0);
        assert_relative_eq!(scale_for_width(f32::INFINITY), 1.0);
    }

    #[test]
    fn widths_below_zero_shrink_to_nothing() {
        assert_relative_eq!(scale_for_width(0.0), 0.0);
        assert_relative_eq!(scale_for_width(-10.0), 0.0);

        let size = scaled_size(20.0 - 2.0 * crate::ui::design_tokens::spacing::MD);
        assert_relative_eq!(size.width, 0.0);
        assert_relative_eq!(size.height, 0.0);
    }

    #[test]
    fn scaled_size_keeps_aspect_ratio() {
        let size = scaled_size(720.0);
        assert_relative_eq!(size.width, 720.0);
        assert_relative_eq!(size.height, 900.0);
    }
}
