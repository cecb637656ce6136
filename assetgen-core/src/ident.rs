//! C identifiers for generated symbols
//!
//! Generated sources export every asset under a symbol, and the compiler on the
//! other side is picky about what counts as a name. Symbols either come from the
//! user (and get checked) or from file names (and get coerced).

use crate::error::{AssetError, Result};

/// Check that `raw` is usable as a C identifier as-is.
pub fn validate_ident(raw: &str) -> Result<&str> {
    let mut chars = raw.chars();
    let head_ok = matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic());
    if head_ok && chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        Ok(raw)
    } else {
        Err(AssetError::InvalidIdent(raw.to_string()))
    }
}

/// Coerce arbitrary text into a C identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, and a leading digit (or an
/// empty input) gets a `_` prefix.
pub fn sanitize_ident(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }

    out
}

/// Derive a symbol from a file name: drop the final extension, join the rest on `_`.
///
/// `blur.frag.wgsl` becomes `blur_frag`.
pub fn symbol_from_file_name(name: &str) -> String {
    let stem = match name.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => name,
    };
    sanitize_ident(stem)
}
