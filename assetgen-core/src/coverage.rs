//! Glyph coverage checks for subset fonts

use read_fonts::{FontRef, TableProvider};
use skrifa::{FontRef as SkrifaFontRef, MetadataProvider};

use crate::error::{AssetError, Result};

/// What a subset font actually contains for the requested text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub glyph_count: u16,
    /// Requested characters with no cmap entry, sorted and deduplicated.
    pub missing: Vec<char>,
}

/// Parse `data` as a font and report which characters of `text` it cannot map.
pub fn check_coverage(data: &[u8], text: &str) -> Result<Coverage> {
    let font = FontRef::new(data).map_err(|e| AssetError::InvalidFont(e.to_string()))?;
    let glyph_count = font
        .maxp()
        .map(|maxp| maxp.num_glyphs())
        .map_err(|e| AssetError::InvalidFont(e.to_string()))?;

    let sfont = SkrifaFontRef::new(data).map_err(|e| AssetError::InvalidFont(e.to_string()))?;
    let charmap = sfont.charmap();

    let mut missing: Vec<char> = text
        .chars()
        .filter(|ch| charmap.map(*ch).is_none())
        .collect();
    missing.sort_unstable();
    missing.dedup();

    Ok(Coverage {
        glyph_count,
        missing,
    })
}
