// SPDX-License-Identifier: MPL-2.0
//! Font families of the card themes and the shared font database.

use crate::domain::calendar::BackgroundTheme;
use resvg::usvg::fontdb;
use std::path::Path;
use std::sync::Arc;

/// Families tried, in order, when no theme font is installed.
const SANS_SERIF_CANDIDATES: [&str; 5] = [
    "Noto Sans",
    "DejaVu Sans",
    "Liberation Sans",
    "Arial",
    "Segoe UI",
];

/// Preferred font family of a theme.
#[must_use]
pub fn family(theme: BackgroundTheme) -> &'static str {
    match theme {
        BackgroundTheme::Thai => "IBM Plex Sans Thai",
        BackgroundTheme::Lao => "Noto Sans Lao",
    }
}

/// CSS-style font list written into the card document.
#[must_use]
pub fn font_stack(theme: BackgroundTheme) -> String {
    format!("'{}', sans-serif", family(theme))
}

/// Loads system fonts, plus every font in `extra_dir` when given.
///
/// The generic `sans-serif` family is pointed at the first installed
/// candidate so that text still renders when the theme fonts are missing.
#[must_use]
pub fn load_database(extra_dir: Option<&Path>) -> Arc<fontdb::Database> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = extra_dir {
        db.load_fonts_dir(dir);
    }

    if let Some(fallback) = SANS_SERIF_CANDIDATES
        .into_iter()
        .find(|name| is_installed(&db, name))
    {
        db.set_sans_serif_family(fallback);
    }
    for theme in [BackgroundTheme::Thai, BackgroundTheme::Lao] {
        if !is_installed(&db, family(theme)) {
            tracing::warn!(family = family(theme), "theme font not installed, using fallback");
        }
    }

    tracing::debug!(faces = db.len(), "font database ready");
    Arc::new(db)
}

/// Whether any face in `db` belongs to the family `name`.
fn is_installed(db: &fontdb::Database, name: &str) -> bool {
    db.faces()
        .any(|face| face.families.iter().any(|(family, _)| family == name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_theme_has_its_own_family() {
        assert_ne!(family(BackgroundTheme::Thai), family(BackgroundTheme::Lao));
    }

    #[test]
    fn empty_database_has_no_installed_family() {
        let db = fontdb::Database::new();
        assert!(!is_installed(&db, family(BackgroundTheme::Thai)));
    }

    #[test]
    fn load_database_tolerates_missing_extra_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        let db = load_database(Some(&dir.path().join("missing")));
        assert_eq!(db.faces().count(), load_database(None).faces().count());
    }

    #[test]
    fn font_stack_ends_with_generic_family() {
        let stack = font_stack(BackgroundTheme::Lao);
        assert!(stack.starts_with("'Noto Sans Lao'"));
        assert!(stack.ends_with("sans-serif"));
    }
}
