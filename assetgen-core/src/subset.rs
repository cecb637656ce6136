//! Glyph subsetting through an external `pyftsubset`-compatible tool

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{AssetError, Result};

/// Program invoked when the caller does not pick one.
pub const DEFAULT_SUBSETTER: &str = "pyftsubset";

/// Anything that can reduce a font to the glyphs needed for `text`.
pub trait Subsetter {
    fn subset(&self, font: &Path, text: &str) -> Result<Vec<u8>>;
}

/// Runs `<program> <font> --text=<text> --output-file=<tmp> --layout-features=`
/// and reads the result back from a temporary `.ttf` file.
#[derive(Debug, Clone)]
pub struct ExternalSubsetter {
    program: String,
}

impl Default for ExternalSubsetter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBSETTER)
    }
}

impl ExternalSubsetter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, font: &Path, text: &str, output: &Path) -> Command {
        let mut text_arg = OsString::from("--text=");
        text_arg.push(text);
        let mut output_arg = OsString::from("--output-file=");
        output_arg.push(output);

        let mut cmd = Command::new(&self.program);
        cmd.arg(font)
            .arg(text_arg)
            .arg(output_arg)
            // no OpenType layout features keeps the result small
            .arg("--layout-features=");
        cmd
    }
}

impl Subsetter for ExternalSubsetter {
    fn subset(&self, font: &Path, text: &str) -> Result<Vec<u8>> {
        if text.is_empty() {
            return Err(AssetError::EmptySubset);
        }
        fs::metadata(font).map_err(|e| AssetError::io("read", font, e))?;

        // TempPath removes the file on drop, so every early return cleans up
        let output = tempfile::Builder::new()
            .prefix("assetgen-subset-")
            .suffix(".ttf")
            .tempfile()
            .map_err(|e| AssetError::io("create", std::env::temp_dir(), e))?
            .into_temp_path();

        debug!(program = %self.program, font = %font.display(), output = %output.display(), "running subsetter");
        let status = self
            .command(font, text, &output)
            .status()
            .map_err(|source| AssetError::SubsetterSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(AssetError::SubsetterFailed {
                program: self.program.clone(),
                status,
            });
        }

        let data = fs::read(&output).map_err(|e| AssetError::io("read", &*output, e))?;
        let tmp_path = output.to_path_buf();
        output
            .close()
            .map_err(|e| AssetError::io("remove", tmp_path, e))?;

        Ok(data)
    }
}
