// SPDX-License-Identifier: MPL-2.0
use econ_calendar::domain::calendar::{
    sample, BackgroundTheme, CalendarSettings, FieldUpdate, NewsList, TopMargin,
    VerticalPadding,
};
use econ_calendar::render::{CardRenderer, RenderAssets, CARD_HEIGHT, CARD_WIDTH};
use resvg::usvg::fontdb;
use std::sync::Arc;
use tempfile::tempdir;

fn renderer() -> CardRenderer {
    CardRenderer::new(RenderAssets::fonts_only(Arc::new(fontdb::Database::new())))
}

fn sample_list() -> NewsList {
    NewsList::from_entries(sample::sample_entries())
}

#[test]
fn document_is_deterministic() {
    let list = sample_list();
    let settings = CalendarSettings::default();

    let first = renderer().document(&list, &settings);
    let mut reused = renderer();
    let _ = reused.document(&list, &settings);
    let second = reused.document(&list, &settings);

    assert_eq!(first, second);
}

#[test]
fn document_escapes_user_text() {
    let mut list = sample_list();
    let id = list.items()[0].id;
    assert!(list.update_field(id, FieldUpdate::Description("<b>GDP & CPI</b>".into())));

    let svg = renderer().document(&list, &CalendarSettings::default());

    assert!(svg.contains("&lt;b&gt;GDP &amp; CPI&lt;/b&gt;"));
    assert!(!svg.contains("<b>"));
}

#[test]
fn theme_changes_the_document() {
    let list = sample_list();
    let thai = CalendarSettings::default();
    let lao = CalendarSettings {
        background: BackgroundTheme::Lao,
        ..CalendarSettings::default()
    };

    let mut renderer = renderer();
    assert_ne!(renderer.document(&list, &thai), renderer.document(&list, &lao));
}

#[test]
fn extreme_settings_rasterize_at_card_size() {
    let list = sample_list();
    let mut renderer = renderer();

    for (padding, margin) in [(0.0, 0.0), (99.0, 9_999.0)] {
        let settings = CalendarSettings {
            vertical_padding: VerticalPadding::new(padding),
            top_margin: TopMargin::from_f32(margin),
            ..CalendarSettings::default()
        };
        let card = renderer.render(&list, &settings).expect("render");
        assert_eq!(card.width, CARD_WIDTH);
        assert_eq!(card.height, CARD_HEIGHT);
        assert_eq!(card.rgba.len(), (CARD_WIDTH * CARD_HEIGHT * 4) as usize);
    }
}

#[test]
fn empty_list_still_renders() {
    let list = NewsList::from_entries(Vec::new());
    let card = renderer()
        .render(&list, &CalendarSettings::default())
        .expect("render");
    assert_eq!(card.width, CARD_WIDTH);
}

#[test]
fn rendered_card_is_saved_as_png() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("card.png");

    let card = renderer()
        .render(&sample_list(), &CalendarSettings::default())
        .expect("render");
    card.save_png(&path).expect("save png");

    let decoded = image_rs::open(&path).expect("decode png");
    assert_eq!(decoded.width(), CARD_WIDTH);
    assert_eq!(decoded.height(), CARD_HEIGHT);
}
