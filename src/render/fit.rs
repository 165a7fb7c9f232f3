// SPDX-License-Identifier: MPL-2.0
//! Memoized letter-spacing fits.

use crate::application::port::{TextMeasure, TextStyle};
use crate::domain::calendar::BackgroundTheme;
use crate::domain::text_fit;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of remembered fits.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FitKey {
    theme: BackgroundTheme,
    font_size_bits: u32,
    bold: bool,
    container_bits: u32,
    text: String,
}

/// LRU cache of letter-spacing fits keyed by font and text.
///
/// A changed text is a new key, so a stale spacing can never be applied to
/// edited content.
pub struct FitCache {
    entries: LruCache<FitKey, f32>,
}

impl FitCache {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Returns the letter spacing that fits `text` into `container` pixels.
    ///
    /// Multi-line text is fitted on its widest line.
    pub fn spacing_for(
        &mut self,
        text: &str,
        style: TextStyle,
        container: f32,
        measure: &dyn TextMeasure,
    ) -> f32 {
        let key = FitKey {
            theme: style.theme,
            font_size_bits: style.font_size.to_bits(),
            bold: style.bold,
            container_bits: container.to_bits(),
            text: text.to_owned(),
        };
        if let Some(spacing) = self.entries.get(&key) {
            return *spacing;
        }

        let spacing = text_fit::fit_letter_spacing(container, |letter_spacing| {
            text.lines()
                .map(|line| measure.text_width(line, style, letter_spacing))
                .fold(0.0, f32::max)
        });
        self.entries.put(key, spacing);
        spacing
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FitCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for FitCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitCache")
            .field("len", &self.entries.len())
            .field("cap", &self.entries.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Every character is 10 px wide plus the spacing.
    struct CountingMeasure {
        calls: AtomicUsize,
    }

    impl TextMeasure for CountingMeasure {
        fn text_width(&self, text: &str, _style: TextStyle, letter_spacing: f32) -> f32 {
            self.calls.fetch_add(1, Ordering::Relaxed);
            #[allow(clippy::cast_precision_loss)]
            let count = text.chars().count() as f32;
            count * (10.0 + letter_spacing)
        }
    }

    fn style() -> TextStyle {
        TextStyle {
            theme: BackgroundTheme::Thai,
            font_size: 19.0,
            bold: false,
        }
    }

    #[test]
    fn repeated_fit_hits_the_cache() {
        let measure = CountingMeasure {
            calls: AtomicUsize::new(0),
        };
        let mut cache = FitCache::default();
        let text = "x".repeat(60);

        let first = cache.spacing_for(&text, style(), 556.0, &measure);
        let calls = measure.calls.load(Ordering::Relaxed);
        let second = cache.spacing_for(&text, style(), 556.0, &measure);

        assert_eq!(first, second);
        assert_eq!(measure.calls.load(Ordering::Relaxed), calls);
    }

    #[test]
    fn changed_text_is_refitted() {
        let measure = CountingMeasure {
            calls: AtomicUsize::new(0),
        };
        let mut cache = FitCache::default();
        let long = cache.spacing_for(&"x".repeat(60), style(), 556.0, &measure);
        let short = cache.spacing_for("short", style(), 556.0, &measure);
        assert!(long < 0.0);
        assert_eq!(short, 0.0);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn multi_line_text_fits_widest_line() {
        let measure = CountingMeasure {
            calls: AtomicUsize::new(0),
        };
        let mut cache = FitCache::default();
        let text = format!("short\n{}", "x".repeat(60));
        let spacing = cache.spacing_for(&text, style(), 556.0, &measure);
        assert!(spacing < 0.0);
        assert!(spacing >= text_fit::MIN_SPACING);
    }
}
