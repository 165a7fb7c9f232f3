// SPDX-License-Identifier: MPL-2.0
//! Layout newtypes.
//!
//! This module provides type-safe wrappers for the two spacing knobs of the
//! preview, ensuring they are always within valid ranges.

// =============================================================================
// Vertical Padding Bounds
// =============================================================================

/// Vertical padding bounds, in rem (0.1 to 2.0).
pub mod padding_bounds {
    /// Minimum padding in rem.
    pub const MIN_REM: f32 = 0.1;
    /// Maximum padding in rem.
    pub const MAX_REM: f32 = 2.0;
    /// Slider step in rem.
    pub const STEP_REM: f32 = 0.1;
    /// Default padding in rem.
    pub const DEFAULT_REM: f32 = 0.4;
    /// Pixels per rem in the fixed-size artifact.
    pub const PX_PER_REM: f32 = 16.0;
}

// =============================================================================
// VerticalPadding
// =============================================================================

/// Padding above and below the rows of each day section, guaranteed to be
/// within 0.1–2.0 rem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalPadding(f32);

impl VerticalPadding {
    /// Creates a new padding, clamping the value to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(rem: f32) -> Self {
        if !rem.is_finite() {
            return Self::default();
        }
        Self(rem.clamp(padding_bounds::MIN_REM, padding_bounds::MAX_REM))
    }

    /// Returns the raw value in rem.
    #[must_use]
    pub fn rem(self) -> f32 {
        self.0
    }

    /// Returns the value in artifact pixels.
    #[must_use]
    pub fn px(self) -> f32 {
        self.0 * padding_bounds::PX_PER_REM
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= padding_bounds::MIN_REM
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= padding_bounds::MAX_REM
    }
}

impl Default for VerticalPadding {
    fn default() -> Self {
        Self(padding_bounds::DEFAULT_REM)
    }
}

// =============================================================================
// Top Margin Bounds
// =============================================================================

/// Top margin bounds, in pixels (20 to 400).
pub mod margin_bounds {
    /// Minimum margin in pixels.
    pub const MIN_PX: u16 = 20;
    /// Maximum margin in pixels.
    pub const MAX_PX: u16 = 400;
    /// Default margin in pixels.
    pub const DEFAULT_PX: u16 = 53;
}

// =============================================================================
// TopMargin
// =============================================================================

/// Gap between the date-range badge and the first day section, guaranteed to
/// be within 20–400 px.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopMargin(u16);

impl TopMargin {
    /// Creates a new margin, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: u16) -> Self {
        Self(px.clamp(margin_bounds::MIN_PX, margin_bounds::MAX_PX))
    }

    /// Creates a margin from a slider value, rounding to whole pixels.
    #[must_use]
    pub fn from_f32(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        // Clamped into the u16 range before the cast.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = px
            .round()
            .clamp(f32::from(margin_bounds::MIN_PX), f32::from(margin_bounds::MAX_PX))
            as u16;
        Self(rounded)
    }

    #[must_use]
    pub fn px(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= margin_bounds::MIN_PX
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= margin_bounds::MAX_PX
    }
}

impl Default for TopMargin {
    fn default() -> Self {
        Self(margin_bounds::DEFAULT_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_clamps_to_bounds() {
        assert_eq!(VerticalPadding::new(0.0).rem(), padding_bounds::MIN_REM);
        assert_eq!(VerticalPadding::new(5.0).rem(), padding_bounds::MAX_REM);
        assert!(VerticalPadding::new(-1.0).is_min());
        assert!(VerticalPadding::new(2.0).is_max());
    }

    #[test]
    fn padding_rejects_non_finite_values() {
        assert_eq!(VerticalPadding::new(f32::NAN), VerticalPadding::default());
        assert_eq!(VerticalPadding::new(f32::INFINITY), VerticalPadding::default());
    }

    #[test]
    fn padding_converts_to_pixels() {
        assert!((VerticalPadding::new(0.5).px() - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn margin_clamps_to_bounds() {
        assert_eq!(TopMargin::new(0).px(), margin_bounds::MIN_PX);
        assert_eq!(TopMargin::new(1000).px(), margin_bounds::MAX_PX);
        assert_eq!(TopMargin::from_f32(-50.0).px(), margin_bounds::MIN_PX);
        assert_eq!(TopMargin::from_f32(120.6).px(), 121);
        assert_eq!(TopMargin::from_f32(f32::NAN), TopMargin::default());
    }
}
