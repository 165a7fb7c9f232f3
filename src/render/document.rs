// SPDX-License-Identifier: MPL-2.0
//! The calendar card as an SVG document.
//!
//! The card has a fixed 960×1200 pixel size. Its layout is computed in two
//! steps: [`layout`] places the badge, the day sections and their rows from
//! the grouping and the settings alone, then [`build_document`] writes the
//! SVG, measuring text where the look depends on it (badge width, description
//! letter spacing).
//!
//! The output is a pure function of its inputs: numbers are written with a
//! fixed precision and elements in grouping order, so identical inputs give
//! byte-identical documents.

use super::assets::RenderAssets;
use super::fit::FitCache;
use super::fonts;
use crate::application::port::{TextMeasure, TextStyle};
use crate::domain::calendar::{
    flags, BackgroundTheme, CalendarSettings, DayGrouping, NewsItem, Weekday,
};
use crate::domain::reference;
use crate::domain::text_fit;
use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// Card width in pixels.
pub const CARD_WIDTH: u32 = 960;
/// Card height in pixels.
pub const CARD_HEIGHT: u32 = 1200;

/// Fixed geometry of the card, in pixels.
pub mod geometry {
    pub const PADDING: f32 = 32.0;
    pub const BADGE_OFFSET: f32 = 152.0;
    pub const BADGE_FONT_SIZE: f32 = 24.0;
    pub const BADGE_LINE_HEIGHT: f32 = 32.0;
    pub const BADGE_PADDING_X: f32 = 40.0;
    pub const BADGE_PADDING_Y: f32 = 4.0;
    pub const BADGE_BORDER: f32 = 1.0;

    pub const SECTION_WIDTH: f32 = 862.0;
    pub const SECTION_GAP: f32 = 16.0;
    pub const DAY_HEADER_HEIGHT: f32 = 27.0;
    pub const DAY_FONT_SIZE: f32 = 22.4;
    /// How far the body slides up under the day header.
    pub const BODY_OVERLAP: f32 = 12.0;
    pub const BODY_RADIUS: f32 = 16.0;
    pub const BODY_PADDING_X: f32 = 16.0;

    pub const ROW_GAP: f32 = 8.0;
    pub const ROW_PADDING_Y: f32 = 4.0;
    pub const ROW_MIN_HEIGHT: f32 = 28.0;
    pub const ROW_FONT_SIZE: f32 = 19.0;
    pub const ROW_LINE_HEIGHT: f32 = 28.5;

    pub const MARKER_SIZE: f32 = 28.0;
    pub const MARKER_RADIUS: f32 = 11.0;
    pub const MARKER_STROKE: f32 = 3.0;
    pub const CELL_GAP: f32 = 12.0;
    pub const FLAG_SLOT_WIDTH: f32 = 44.0;
    pub const FLAG_SIZE: f32 = 28.8;
    pub const FLAG_OVERLAP: f32 = 8.0;
    pub const FLAG_BORDER: f32 = 2.0;
    pub const TIME_WIDTH: f32 = 57.0;
    pub const DESCRIPTION_INSET: f32 = 12.0;
    pub const VALUE_WIDTH: f32 = 109.0;

    /// Baseline offset below the vertical center of a line, per pixel of
    /// font size.
    pub const BASELINE_FACTOR: f32 = 0.35;
}

use geometry as g;

// =============================================================================
// Layout
// =============================================================================

/// Vertical placement of one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub top: f32,
    pub height: f32,
    /// Number of text lines the row is sized for.
    pub lines: usize,
}

impl RowLayout {
    #[must_use]
    pub fn center(&self) -> f32 {
        self.top + self.height / 2.0
    }
}

/// Placement of one day section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub day: Weekday,
    pub header_top: f32,
    pub body_top: f32,
    pub body_bottom: f32,
    pub rows: Vec<RowLayout>,
}

/// Placement of every element of the card that does not depend on text
/// measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub badge_top: f32,
    pub badge_height: f32,
    pub sections: Vec<SectionLayout>,
}

impl CardLayout {
    /// Left edge of every day section.
    #[must_use]
    pub fn section_left() -> f32 {
        (CARD_WIDTH as f32 - g::SECTION_WIDTH) / 2.0
    }
}

fn line_count(text: &str) -> usize {
    text.lines().count().max(1)
}

/// Places the badge and one section per non-empty day.
#[must_use]
pub fn layout(grouping: &DayGrouping<'_>, settings: &CalendarSettings) -> CardLayout {
    let padding = settings.vertical_padding.px();
    let badge_top = g::PADDING + g::BADGE_OFFSET;
    let badge_height = g::BADGE_LINE_HEIGHT + 2.0 * (g::BADGE_PADDING_Y + g::BADGE_BORDER);

    let mut cursor = badge_top + badge_height + f32::from(settings.top_margin.px());
    let mut sections = Vec::new();
    for (day, items) in grouping.non_empty() {
        let header_top = cursor;
        let body_top = header_top + g::DAY_HEADER_HEIGHT - g::BODY_OVERLAP;
        let mut row_top = header_top + g::DAY_HEADER_HEIGHT + padding;

        let mut rows = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                row_top += g::ROW_GAP;
            }
            let lines = line_count(&item.description).max(line_count(&item.value));
            #[allow(clippy::cast_precision_loss)]
            let text_height = lines as f32 * g::ROW_LINE_HEIGHT;
            let height = text_height.max(g::ROW_MIN_HEIGHT) + 2.0 * g::ROW_PADDING_Y;
            rows.push(RowLayout {
                top: row_top,
                height,
                lines,
            });
            row_top += height;
        }

        let body_bottom = row_top + padding;
        sections.push(SectionLayout {
            day,
            header_top,
            body_top,
            body_bottom,
            rows,
        });
        cursor = body_bottom + g::SECTION_GAP;
    }

    CardLayout {
        badge_top,
        badge_height,
        sections,
    }
}

// =============================================================================
// Writing
// =============================================================================

/// A number written with at most two decimals and no trailing zeros.
struct Num(f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        let text = format!("{rounded:.2}");
        let text = text.trim_end_matches('0').trim_end_matches('.');
        if text == "-0" {
            f.write_str("0")
        } else {
            f.write_str(text)
        }
    }
}

/// Escapes text for use in XML content and attribute values.
///
/// Characters XML 1.0 cannot represent (most C0 controls) are dropped.
#[must_use]
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    let needs_work = text
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'') || is_forbidden(c));
    if !needs_work {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if is_forbidden(c) => {}
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn is_forbidden(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n' | '\r')
}

struct SvgWriter {
    out: String,
}

impl SvgWriter {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.out.write_fmt(args);
        self.out.push('\n');
    }
}

const TEXT_COLOR: &str = "#FFFFFF";
const BADGE_TEXT_COLOR: &str = "#000000";
const BADGE_BORDER_COLOR: &str = "#F3F4F6";
const BODY_FILL: &str = "#252121";
const BODY_OPACITY: f32 = 0.8;
const FLAG_BACKDROP: &str = "#1F2937";
const FLAG_BORDER_COLOR: &str = "#3A2420";
const FLAG_BORDER_OPACITY: f32 = 0.8;

fn gradient_stops(theme: BackgroundTheme) -> (&'static str, &'static str) {
    match theme {
        BackgroundTheme::Thai => ("#7C2D12", "#1C1917"),
        BackgroundTheme::Lao => ("#1E3A8A", "#0F172A"),
    }
}

/// Builds the SVG document of the card.
///
/// `fit` memoizes description letter spacing across calls; `measure`
/// provides text widths for the badge and the fits.
pub fn build_document(
    grouping: &DayGrouping<'_>,
    settings: &CalendarSettings,
    assets: &RenderAssets,
    fit: &mut FitCache,
    measure: &dyn TextMeasure,
) -> String {
    let theme = settings.background;
    let card = layout(grouping, settings);
    let mut svg = SvgWriter {
        out: String::with_capacity(8 * 1024),
    };

    svg.line(format_args!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}" xml:space="preserve" font-family="{font}">"#,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
        font = escape_xml(&fonts::font_stack(theme)),
    ));
    write_defs(&mut svg, theme);
    write_background(&mut svg, assets);
    write_badge(&mut svg, &card, settings, measure);

    for (section, (_, items)) in card.sections.iter().zip(grouping.non_empty()) {
        write_section(&mut svg, section);
        for (row, item) in section.rows.iter().zip(items.iter()) {
            write_row(&mut svg, row, item, theme, assets, fit, measure);
        }
    }

    svg.line(format_args!("</svg>"));
    svg.out
}

fn write_defs(svg: &mut SvgWriter, theme: BackgroundTheme) {
    let (top, bottom) = gradient_stops(theme);
    svg.line(format_args!("<defs>"));
    svg.line(format_args!(
        r#"<linearGradient id="background-gradient" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{top}"/><stop offset="1" stop-color="{bottom}"/></linearGradient>"#
    ));
    svg.line(format_args!(
        r##"<filter id="badge-glow" x="-20%" y="-50%" width="140%" height="220%"><feDropShadow dx="0" dy="4" stdDeviation="7.5" flood-color="#FF5C0B" flood-opacity="0.6"/></filter>"##
    ));
    svg.line(format_args!(
        r##"<filter id="section-shadow" x="-10%" y="-10%" width="120%" height="140%"><feDropShadow dx="0" dy="10" stdDeviation="7.5" flood-color="#000000" flood-opacity="0.3"/></filter>"##
    ));
    svg.line(format_args!(
        r##"<filter id="header-shadow" x="-10%" y="-50%" width="120%" height="250%"><feDropShadow dx="0" dy="6" stdDeviation="6" flood-color="#000000" flood-opacity="0.15"/></filter>"##
    ));
    svg.line(format_args!(
        r#"<clipPath id="flag-clip" clipPathUnits="objectBoundingBox"><circle cx="0.5" cy="0.5" r="0.5"/></clipPath>"#
    ));
    svg.line(format_args!("</defs>"));
}

fn write_background(svg: &mut SvgWriter, assets: &RenderAssets) {
    match assets.background() {
        Some(url) => svg.line(format_args!(
            r#"<image x="0" y="0" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" preserveAspectRatio="xMidYMid slice" xlink:href="{url}"/>"#
        )),
        None => svg.line(format_args!(
            r#"<rect x="0" y="0" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" fill="url(#background-gradient)"/>"#
        )),
    }
}

fn write_badge(
    svg: &mut SvgWriter,
    card: &CardLayout,
    settings: &CalendarSettings,
    measure: &dyn TextMeasure,
) {
    let style = TextStyle {
        theme: settings.background,
        font_size: g::BADGE_FONT_SIZE,
        bold: true,
    };
    let text = settings.date_range.replace('\n', " ");
    let text_width = measure.text_width(&text, style, 0.0);
    let width = text_width + 2.0 * (g::BADGE_PADDING_X + g::BADGE_BORDER);
    let left = (CARD_WIDTH as f32 - width) / 2.0;
    let center_y = card.badge_top + card.badge_height / 2.0;

    svg.line(format_args!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="#FFFFFF" stroke="{BADGE_BORDER_COLOR}" stroke-width="{}" filter="url(#badge-glow)"/>"##,
        Num(left),
        Num(card.badge_top),
        Num(width),
        Num(card.badge_height),
        Num(card.badge_height / 2.0),
        Num(g::BADGE_BORDER),
    ));
    if !text.is_empty() {
        svg.line(format_args!(
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="{}" font-weight="700" fill="{BADGE_TEXT_COLOR}">{}</text>"#,
            Num(CARD_WIDTH as f32 / 2.0),
            Num(center_y + g::BADGE_FONT_SIZE * g::BASELINE_FACTOR),
            Num(g::BADGE_FONT_SIZE),
            escape_xml(&text),
        ));
    }
}

fn write_section(svg: &mut SvgWriter, section: &SectionLayout) {
    let left = CardLayout::section_left();
    let right = left + g::SECTION_WIDTH;
    let radius = g::BODY_RADIUS.min((section.body_bottom - section.body_top) / 2.0);

    svg.line(format_args!(
        r##"<path d="M{l} {t} H{r} V{b1} Q{r} {b} {r1} {b} H{l1} Q{l} {b} {l} {b1} Z" fill="{BODY_FILL}" fill-opacity="{}" stroke="#FFFFFF" stroke-width="0.8" filter="url(#section-shadow)"/>"##,
        Num(BODY_OPACITY),
        l = Num(left),
        t = Num(section.body_top),
        r = Num(right),
        b = Num(section.body_bottom),
        b1 = Num(section.body_bottom - radius),
        r1 = Num(right - radius),
        l1 = Num(left + radius),
    ));
    svg.line(format_args!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="#FFFFFF" filter="url(#header-shadow)"/>"##,
        Num(left),
        Num(section.header_top),
        Num(g::SECTION_WIDTH),
        Num(g::DAY_HEADER_HEIGHT),
        Num(g::DAY_HEADER_HEIGHT / 2.0),
    ));
    let baseline =
        section.header_top + g::DAY_HEADER_HEIGHT / 2.0 + g::DAY_FONT_SIZE * g::BASELINE_FACTOR;
    svg.line(format_args!(
        r##"<text x="{}" y="{}" text-anchor="middle" font-size="{}" font-weight="700" fill="#000000">{}</text>"##,
        Num(CARD_WIDTH as f32 / 2.0),
        Num(baseline),
        Num(g::DAY_FONT_SIZE),
        section.day.label(),
    ));
}

/// Baselines of `lines` text lines centered on `center`.
fn baselines(center: f32, lines: usize) -> impl Iterator<Item = f32> {
    #[allow(clippy::cast_precision_loss)]
    let block_top = center - lines as f32 * g::ROW_LINE_HEIGHT / 2.0;
    (0..lines).map(move |index| {
        #[allow(clippy::cast_precision_loss)]
        let line_center = block_top + (index as f32 + 0.5) * g::ROW_LINE_HEIGHT;
        line_center + g::ROW_FONT_SIZE * g::BASELINE_FACTOR
    })
}

fn write_text_lines(
    svg: &mut SvgWriter,
    text: &str,
    x: f32,
    center: f32,
    anchor: &str,
    letter_spacing: f32,
) {
    if text.is_empty() {
        return;
    }
    let spacing = if letter_spacing == 0.0 {
        String::new()
    } else {
        format!(r#" letter-spacing="{}""#, Num(letter_spacing))
    };
    let lines: Vec<&str> = text.lines().collect();
    for (line, baseline) in lines.iter().zip(baselines(center, lines.len())) {
        if line.is_empty() {
            continue;
        }
        svg.line(format_args!(
            r#"<text x="{}" y="{}" text-anchor="{anchor}" font-size="{}" fill="{TEXT_COLOR}"{spacing}>{}</text>"#,
            Num(x),
            Num(baseline),
            Num(g::ROW_FONT_SIZE),
            escape_xml(line),
        ));
    }
}

fn write_row(
    svg: &mut SvgWriter,
    row: &RowLayout,
    item: &NewsItem,
    theme: BackgroundTheme,
    assets: &RenderAssets,
    fit: &mut FitCache,
    measure: &dyn TextMeasure,
) {
    let left = CardLayout::section_left() + g::BODY_PADDING_X;
    let center = row.center();

    let meta = reference::importance_meta(item.importance);
    if meta.show_in_preview {
        svg.line(format_args!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            Num(left + g::MARKER_SIZE / 2.0),
            Num(center),
            Num(g::MARKER_RADIUS),
            meta.fill,
            meta.stroke,
            Num(g::MARKER_STROKE),
        ));
    }

    let flags_left = left + g::MARKER_SIZE + g::CELL_GAP;
    let radius = g::FLAG_SIZE / 2.0;
    let known = flags::codes(&item.flags).filter_map(|code| assets.flag(code));
    for (index, url) in known.enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let x = flags_left + index as f32 * (g::FLAG_SIZE - g::FLAG_OVERLAP);
        svg.line(format_args!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{FLAG_BACKDROP}"/>"#,
            Num(x + radius),
            Num(center),
            Num(radius),
        ));
        svg.line(format_args!(
            r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice" clip-path="url(#flag-clip)" xlink:href="{url}"/>"#,
            Num(x),
            Num(center - radius),
            Num(g::FLAG_SIZE),
            Num(g::FLAG_SIZE),
        ));
        svg.line(format_args!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{FLAG_BORDER_COLOR}" stroke-opacity="{}" stroke-width="{}"/>"#,
            Num(x + radius),
            Num(center),
            Num(radius - g::FLAG_BORDER / 2.0),
            Num(FLAG_BORDER_OPACITY),
            Num(g::FLAG_BORDER),
        ));
    }

    let time_left = flags_left + g::FLAG_SLOT_WIDTH + g::CELL_GAP;
    let time = item.time.split_whitespace().collect::<Vec<_>>().join(" ");
    write_text_lines(svg, &time, time_left, center, "start", 0.0);

    let description_left = time_left + g::TIME_WIDTH + g::DESCRIPTION_INSET;
    let style = TextStyle {
        theme,
        font_size: g::ROW_FONT_SIZE,
        bold: false,
    };
    let spacing = fit.spacing_for(&item.description, style, text_fit::DESCRIPTION_WIDTH, measure);
    write_text_lines(svg, &item.description, description_left, center, "start", spacing);

    let value_right = CardLayout::section_left() + g::SECTION_WIDTH - g::BODY_PADDING_X;
    write_text_lines(svg, &item.value, value_right, center, "end", 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::{
        FieldUpdate, Importance, ItemId, NewsEntry, NewsList, TopMargin, VerticalPadding,
    };
    use crate::infrastructure::FlagImages;
    use resvg::usvg::fontdb;
    use std::sync::Arc;

    /// 10 px per character plus spacing, bold text 12 px.
    struct FixedMeasure;

    impl TextMeasure for FixedMeasure {
        fn text_width(&self, text: &str, style: TextStyle, letter_spacing: f32) -> f32 {
            let advance = if style.bold { 12.0 } else { 10.0 };
            #[allow(clippy::cast_precision_loss)]
            let count = text.chars().count() as f32;
            count * (advance + letter_spacing)
        }
    }

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn assets_with_flags(codes: &[&'static str]) -> RenderAssets {
        let mut flags = FlagImages::default();
        for code in codes {
            flags.insert(code, PNG_SIGNATURE.to_vec());
        }
        RenderAssets::new(Arc::new(fontdb::Database::new()), &flags, None)
    }

    fn entry(day: Weekday, description: &str, importance: Importance) -> NewsEntry {
        NewsEntry {
            day,
            time: "09:00".into(),
            flags: "USA".into(),
            description: description.into(),
            value: "1.0%".into(),
            importance,
        }
    }

    fn build(list: &NewsList, settings: &CalendarSettings, assets: &RenderAssets) -> String {
        build_document(
            &list.grouping(),
            settings,
            assets,
            &mut FitCache::default(),
            &FixedMeasure,
        )
    }

    #[test]
    fn identical_inputs_give_identical_documents() {
        let list = NewsList::from_entries(vec![
            entry(Weekday::Mon, "Holiday", Importance::Low),
            entry(Weekday::Wed, "Rate decision", Importance::High),
        ]);
        let settings = CalendarSettings::default();
        let assets = assets_with_flags(&["USA"]);
        assert_eq!(build(&list, &settings, &assets), build(&list, &settings, &assets));
    }

    #[test]
    fn only_non_empty_days_get_sections() {
        let list = NewsList::from_entries(vec![
            entry(Weekday::Tue, "A", Importance::Medium),
            entry(Weekday::Fri, "B", Importance::Medium),
        ]);
        let card = layout(&list.grouping(), &CalendarSettings::default());
        let days: Vec<Weekday> = card.sections.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![Weekday::Tue, Weekday::Fri]);

        let svg = build(&list, &CalendarSettings::default(), &assets_with_flags(&[]));
        assert!(svg.contains(">Tue</text>"));
        assert!(!svg.contains(">Mon</text>"));
    }

    #[test]
    fn low_importance_has_no_marker() {
        let list = NewsList::from_entries(vec![entry(Weekday::Mon, "Holiday", Importance::Low)]);
        let svg = build(&list, &CalendarSettings::default(), &assets_with_flags(&[]));
        let low = reference::importance_meta(Importance::Low);
        assert!(!svg.contains(&low.fill.to_string()));

        let list = NewsList::from_entries(vec![entry(Weekday::Mon, "Holiday", Importance::High)]);
        let svg = build(&list, &CalendarSettings::default(), &assets_with_flags(&[]));
        let high = reference::importance_meta(Importance::High);
        assert!(svg.contains(&high.fill.to_string()));
    }

    #[test]
    fn unknown_flags_render_nothing() {
        let mut list = NewsList::from_entries(vec![entry(Weekday::Mon, "X", Importance::Low)]);
        list.update_field(ItemId::new(1), FieldUpdate::Flags("XX,USA,ZZ".into()));
        let svg = build(&list, &CalendarSettings::default(), &assets_with_flags(&["USA"]));
        assert_eq!(svg.matches("clip-path=\"url(#flag-clip)\"").count(), 1);
    }

    #[test]
    fn flags_without_loaded_images_are_skipped() {
        let list = NewsList::from_entries(vec![entry(Weekday::Mon, "X", Importance::Low)]);
        let svg = build(&list, &CalendarSettings::default(), &assets_with_flags(&[]));
        assert!(!svg.contains("flag-clip)"));
    }

    #[test]
    fn long_description_gets_negative_spacing_within_floor() {
        let long = "x".repeat(70);
        let list = NewsList::from_entries(vec![entry(Weekday::Mon, &long, Importance::Medium)]);
        let svg = build(&list, &CalendarSettings::default(), &assets_with_flags(&[]));
        assert!(svg.contains("letter-spacing=\"-"));
        assert!(!svg.contains("letter-spacing=\"-2.6"));

        let huge = "x".repeat(400);
        let list = NewsList::from_entries(vec![entry(Weekday::Mon, &huge, Importance::Medium)]);
        let svg = build(&list, &CalendarSettings::default(), &assets_with_flags(&[]));
        assert!(svg.contains("letter-spacing=\"-2.5\""));
    }

    #[test]
    fn text_is_escaped() {
        let list = NewsList::from_entries(vec![entry(
            Weekday::Mon,
            "GDP <prelim> & \"final\"",
            Importance::Medium,
        )]);
        let svg = build(&list, &CalendarSettings::default(), &assets_with_flags(&[]));
        assert!(svg.contains("GDP &lt;prelim&gt; &amp; &quot;final&quot;"));
    }

    #[test]
    fn escape_drops_control_characters() {
        assert_eq!(escape_xml("a\u{1}b"), "ab");
        assert_eq!(escape_xml("tab\tok"), "tab\tok");
        assert!(matches!(escape_xml("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn padding_and_margin_bounds_keep_geometry_positive() {
        let list = NewsList::from_entries(vec![
            entry(Weekday::Mon, "A", Importance::Medium),
            entry(Weekday::Mon, "B\nsecond line", Importance::Medium),
            entry(Weekday::Thu, "C", Importance::High),
        ]);
        for (padding, margin) in [(0.0, 0), (0.1, 20), (2.0, 400), (99.0, u16::MAX)] {
            let settings = CalendarSettings {
                vertical_padding: VerticalPadding::new(padding),
                top_margin: TopMargin::new(margin),
                ..CalendarSettings::default()
            };
            let card = layout(&list.grouping(), &settings);
            let mut previous_bottom = card.badge_top + card.badge_height;
            for section in &card.sections {
                assert!(section.header_top >= previous_bottom);
                assert!(section.body_bottom > section.body_top);
                for row in &section.rows {
                    assert!(row.height >= g::ROW_MIN_HEIGHT);
                    assert!(row.top >= section.body_top);
                    assert!(row.top + row.height <= section.body_bottom);
                }
                previous_bottom = section.body_bottom;
            }
            let svg = build(&list, &settings, &assets_with_flags(&[]));
            assert!(!svg.contains("height=\"-"));
            assert!(!svg.contains("width=\"-"));
        }
    }

    #[test]
    fn multi_line_description_grows_the_row() {
        let list = NewsList::from_entries(vec![
            entry(Weekday::Mon, "one line", Importance::Medium),
            entry(Weekday::Mon, "two\nlines", Importance::Medium),
        ]);
        let card = layout(&list.grouping(), &CalendarSettings::default());
        let rows = &card.sections[0].rows;
        assert_eq!(rows[0].lines, 1);
        assert_eq!(rows[1].lines, 2);
        assert!(rows[1].height > rows[0].height);
    }

    #[test]
    fn larger_margin_moves_sections_down() {
        let list = NewsList::from_entries(vec![entry(Weekday::Mon, "A", Importance::Medium)]);
        let near = CalendarSettings {
            top_margin: TopMargin::new(20),
            ..CalendarSettings::default()
        };
        let far = CalendarSettings {
            top_margin: TopMargin::new(200),
            ..CalendarSettings::default()
        };
        let near_top = layout(&list.grouping(), &near).sections[0].header_top;
        let far_top = layout(&list.grouping(), &far).sections[0].header_top;
        assert!((far_top - near_top - 180.0).abs() < 1e-3);
    }

    #[test]
    fn gradient_is_used_without_background_image() {
        let list = NewsList::default();
        let svg = build(&list, &CalendarSettings::default(), &assets_with_flags(&[]));
        assert!(svg.contains("url(#background-gradient)"));
    }

    #[test]
    fn numbers_are_written_compactly() {
        assert_eq!(Num(12.0).to_string(), "12");
        assert_eq!(Num(0.8).to_string(), "0.8");
        assert_eq!(Num(-0.001).to_string(), "0");
        assert_eq!(Num(-2.5).to_string(), "-2.5");
    }
}
