#![cfg(feature = "fontations")]

use std::env;
use std::fs;
use std::path::PathBuf;

use assetgen_core::coverage::check_coverage;
use assetgen_core::error::AssetError;

fn latin_font() -> Option<PathBuf> {
    if let Ok(env_override) = env::var("ASSETGEN_TEST_FONT") {
        let path = PathBuf::from(env_override);
        if path.is_file() {
            return Some(path);
        }
    }

    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    candidates
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

#[test]
fn reports_glyph_count_and_unmapped_characters() {
    let font = match latin_font() {
        Some(path) => path,
        None => return, // skip when fixtures are unavailable
    };
    let data = fs::read(&font).expect("read font");

    let coverage = check_coverage(&data, "ab\u{e900}a").expect("coverage");

    assert!(coverage.glyph_count > 2, "glyphs: {}", coverage.glyph_count);
    assert_eq!(coverage.missing, vec!['\u{e900}']);
}

#[test]
fn fully_covered_text_has_nothing_missing() {
    let font = match latin_font() {
        Some(path) => path,
        None => return, // skip when fixtures are unavailable
    };
    let data = fs::read(&font).expect("read font");

    let coverage = check_coverage(&data, "Hello").expect("coverage");
    assert!(coverage.missing.is_empty());
}

#[test]
fn truncated_font_is_rejected() {
    let err = check_coverage(b"\x00\x01\x00\x00\x00", "a").unwrap_err();
    assert!(matches!(err, AssetError::InvalidFont(_)));
}
