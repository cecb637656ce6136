//! Byte-array serialization into C/C++ declaration and definition sources

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AssetError, Result};
use crate::ident::validate_ident;

/// Symbol used when the caller does not pick one.
pub const DEFAULT_SYMBOL: &str = "icons_data";

/// Bytes written per line of the definition file.
pub const DEFAULT_BYTES_PER_LINE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    symbol: String,
    bytes_per_line: usize,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
        }
    }
}

impl EmbedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `symbol` for the array; the length becomes `<symbol>_len`.
    pub fn with_symbol(mut self, symbol: &str) -> Result<Self> {
        self.symbol = validate_ident(symbol)?.to_string();
        Ok(self)
    }

    /// Group bytes per line; values below one are treated as one.
    pub fn with_bytes_per_line(mut self, n: usize) -> Self {
        self.bytes_per_line = n.max(1);
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn length_symbol(&self) -> String {
        format!("{}_len", self.symbol)
    }

    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }
}

/// Declaration (header) text: the array and its length, independent of content.
pub fn render_declaration(opts: &EmbedOptions) -> String {
    format!(
        "extern unsigned char {}[];\nextern unsigned int {};\n",
        opts.symbol(),
        opts.length_symbol()
    )
}

/// Definition (source) text with every byte as a `0x..` literal.
pub fn render_definition(bytes: &[u8], opts: &EmbedOptions) -> String {
    // "0xNN, " is six chars, plus the line breaks
    let lines = bytes.len() / opts.bytes_per_line + 1;
    let mut out = String::with_capacity(bytes.len() * 6 + lines * 5 + 96);

    let _ = write!(out, "unsigned char {}[] = {{", opts.symbol());
    for (i, b) in bytes.iter().enumerate() {
        if i % opts.bytes_per_line == 0 {
            out.push_str("\n    ");
        }
        let _ = write!(out, "0x{b:02x}, ");
    }
    out.push_str("\n};\n");
    let _ = writeln!(out, "unsigned int {} = {};", opts.length_symbol(), bytes.len());

    out
}

/// Render both files in memory, then write the declaration and the definition.
///
/// Nothing is touched on disk until both texts exist.
pub fn write_embedded(
    bytes: &[u8],
    definition_path: &Path,
    declaration_path: &Path,
    opts: &EmbedOptions,
) -> Result<()> {
    let declaration = render_declaration(opts);
    let definition = render_definition(bytes, opts);

    fs::write(declaration_path, declaration)
        .map_err(|e| AssetError::io("write", declaration_path, e))?;
    fs::write(definition_path, definition)
        .map_err(|e| AssetError::io("write", definition_path, e))?;

    debug!(
        symbol = opts.symbol(),
        bytes = bytes.len(),
        definition = %definition_path.display(),
        declaration = %declaration_path.display(),
        "wrote embedded array"
    );
    Ok(())
}

/// Bytes and length recovered from a generated definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDefinition {
    pub bytes: Vec<u8>,
    pub declared_len: usize,
}

/// Parse a definition produced by [`render_definition`] back into its bytes.
pub fn parse_definition(text: &str) -> Result<ParsedDefinition> {
    let open = text
        .find('{')
        .ok_or_else(|| AssetError::MalformedDefinition("missing `{`".into()))?;
    let close = text[open..]
        .find("};")
        .map(|i| open + i)
        .ok_or_else(|| AssetError::MalformedDefinition("missing `};`".into()))?;

    let body = &text[open + 1..close];
    let mut bytes = Vec::new();
    for token in body.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let hex = token
            .strip_prefix("0x")
            .ok_or_else(|| AssetError::MalformedDefinition(format!("bad literal {token:?}")))?;
        let byte = u8::from_str_radix(hex, 16)
            .map_err(|_| AssetError::MalformedDefinition(format!("bad literal {token:?}")))?;
        bytes.push(byte);
    }

    let declared_len = text[close + 2..]
        .split_once('=')
        .and_then(|(_, rest)| rest.split_once(';'))
        .and_then(|(num, _)| num.trim().parse().ok())
        .ok_or_else(|| AssetError::MalformedDefinition("missing length constant".into()))?;

    Ok(ParsedDefinition {
        bytes,
        declared_len,
    })
}
