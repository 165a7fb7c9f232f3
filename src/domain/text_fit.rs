// SPDX-License-Identifier: MPL-2.0
//! Letter-spacing auto-fit.
//!
//! A line of text is shrunk by tightening its letter spacing in 0.1 px steps
//! until it fits its cell or the spacing reaches the floor. The measuring
//! itself is injected so that the algorithm stays independent of any font
//! engine.

/// Width of the description cell of a preview row, in pixels.
pub const DESCRIPTION_WIDTH: f32 = 556.0;

/// Tightest letter spacing ever applied, in pixels.
pub const MIN_SPACING: f32 = -2.5;

/// Spacing decrement per iteration, in pixels.
pub const SPACING_STEP: f32 = 0.1;

/// Number of decrements between neutral spacing and [`MIN_SPACING`].
const MAX_STEPS: u16 = 25;

/// Returns the letter spacing (≤ 0) that makes the text fit `container`.
///
/// `measure` returns the rendered width of the text for a given letter
/// spacing. Every fit starts from neutral spacing; the result never goes
/// below [`MIN_SPACING`], even if the text still overflows there.
///
/// Steps are counted as integers so that the floor is hit exactly instead
/// of accumulating float error.
pub fn fit_letter_spacing<F>(container: f32, mut measure: F) -> f32
where
    F: FnMut(f32) -> f32,
{
    let mut steps: u16 = 0;
    let mut spacing = 0.0;
    while measure(spacing) > container && steps < MAX_STEPS {
        steps += 1;
        spacing = -f32::from(steps) * SPACING_STEP;
    }
    spacing
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake measurer: fixed glyph advance plus spacing after every glyph.
    fn linear(glyphs: usize, advance: f32) -> impl FnMut(f32) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let count = glyphs as f32;
        move |spacing| count * (advance + spacing)
    }

    #[test]
    fn short_text_keeps_neutral_spacing() {
        assert_eq!(fit_letter_spacing(DESCRIPTION_WIDTH, linear(20, 10.0)), 0.0);
    }

    #[test]
    fn slightly_long_text_is_tightened_just_enough() {
        // 60 glyphs * 10 px = 600 px; needs 44 px less, i.e. about -0.74 px each.
        let spacing = fit_letter_spacing(DESCRIPTION_WIDTH, linear(60, 10.0));
        assert!(spacing < 0.0);
        assert!(spacing >= MIN_SPACING);
        let mut measure = linear(60, 10.0);
        assert!(measure(spacing) <= DESCRIPTION_WIDTH);
        assert!(measure(spacing + SPACING_STEP) > DESCRIPTION_WIDTH);
    }

    #[test]
    fn very_long_text_stops_at_floor() {
        let spacing = fit_letter_spacing(DESCRIPTION_WIDTH, linear(200, 10.0));
        assert_eq!(spacing, MIN_SPACING);
    }

    #[test]
    fn never_goes_below_floor() {
        let spacing = fit_letter_spacing(1.0, |_| f32::MAX);
        assert!(spacing >= MIN_SPACING);
    }

    #[test]
    fn measures_neutral_spacing_first() {
        let mut calls = Vec::new();
        fit_letter_spacing(DESCRIPTION_WIDTH, |spacing| {
            calls.push(spacing);
            0.0
        });
        assert_eq!(calls, vec![0.0]);
    }
}
