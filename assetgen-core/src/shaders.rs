//! Shader source embedding as raw string constants

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::discovery::SourceDiscovery;
use crate::error::{AssetError, Result};
use crate::ident::symbol_from_file_name;

/// Extension embedded when the caller does not list any.
pub const DEFAULT_SHADER_EXTENSION: &str = "wgsl";

/// Delimiter of the C++ raw string literal wrapping each shader.
pub const RAW_DELIMITER: &str = "__shader__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub path: PathBuf,
    pub symbol: String,
    pub text: String,
}

impl ShaderSource {
    /// Name the shader after its file and check it fits inside the raw literal.
    pub fn new(path: PathBuf, text: String) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let symbol = symbol_from_file_name(&file_name);

        let terminator = format!("){RAW_DELIMITER}\"");
        if text.contains(&terminator) {
            return Err(AssetError::DelimiterCollision { path, terminator });
        }

        Ok(Self { path, symbol, text })
    }
}

/// Read every discovered shader; symbols must be unique across the set.
pub fn load_shaders(discovery: &impl SourceDiscovery) -> Result<Vec<ShaderSource>> {
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let mut shaders = Vec::new();

    for source in discovery.discover()? {
        let text = fs::read_to_string(&source.path)
            .map_err(|e| AssetError::io("read", &source.path, e))?;
        let shader = ShaderSource::new(source.path, text)?;

        if let Some(first) = seen.get(&shader.symbol) {
            return Err(AssetError::DuplicateSymbol {
                symbol: shader.symbol,
                first: first.clone(),
                second: shader.path,
            });
        }
        seen.insert(shader.symbol.clone(), shader.path.clone());

        debug!(path = %shader.path.display(), symbol = %shader.symbol, "loaded shader");
        shaders.push(shader);
    }

    Ok(shaders)
}

pub fn render_shader_declarations(shaders: &[ShaderSource]) -> String {
    let mut out = String::from("#pragma once\n");
    for shader in shaders {
        let _ = write!(out, "\nextern const char {}[];\n", shader.symbol);
    }
    out
}

/// `include` is emitted verbatim in the `#include "..."` line.
pub fn render_shader_definitions(shaders: &[ShaderSource], include: &str) -> String {
    let mut out = format!("#include \"{include}\"\n");
    for shader in shaders {
        let _ = write!(
            out,
            "\nconst char {}[] = R\"{RAW_DELIMITER}({}){RAW_DELIMITER}\";\n",
            shader.symbol, shader.text
        );
    }
    out
}

/// Write the declaration, then the definition that includes it by its given path.
pub fn write_shaders(
    shaders: &[ShaderSource],
    definition_path: &Path,
    declaration_path: &Path,
) -> Result<()> {
    let include = declaration_path.to_string_lossy();
    let declaration = render_shader_declarations(shaders);
    let definition = render_shader_definitions(shaders, &include);

    fs::write(declaration_path, declaration)
        .map_err(|e| AssetError::io("write", declaration_path, e))?;
    fs::write(definition_path, definition)
        .map_err(|e| AssetError::io("write", definition_path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shader(name: &str, text: &str) -> ShaderSource {
        ShaderSource::new(PathBuf::from(format!("shaders/{name}")), text.to_string())
            .expect("shader")
    }

    #[test]
    fn declarations_start_with_pragma() {
        let text = render_shader_declarations(&[shader("blit.wgsl", "")]);
        assert_eq!(text, "#pragma once\n\nextern const char blit[];\n");
    }

    #[test]
    fn definitions_wrap_text_in_raw_strings() {
        let text = render_shader_definitions(
            &[shader("post.fx.wgsl", "fn main() {}\n")],
            "gen/shaders.h",
        );
        assert_eq!(
            text,
            "#include \"gen/shaders.h\"\n\nconst char post_fx[] = R\"__shader__(fn main() {}\n)__shader__\";\n"
        );
    }

    #[test]
    fn empty_set_renders_headers_only() {
        assert_eq!(render_shader_declarations(&[]), "#pragma once\n");
        assert_eq!(render_shader_definitions(&[], "s.h"), "#include \"s.h\"\n");
    }

    #[test]
    fn rejects_text_containing_terminator() {
        let err = ShaderSource::new(
            PathBuf::from("evil.wgsl"),
            "// )__shader__\" oops".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, AssetError::DelimiterCollision { .. }));
    }
}
