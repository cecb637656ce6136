//! assetgen-core: turning files into code the C++ compiler can swallow
//!
//! Some assets are easier to ship inside the binary than next to it. This
//! crate does the three chores a native build needs for that:
//!
//! - **Embedding** ([`embed`]): any byte sequence becomes an `unsigned char`
//!   array plus a length, split across a declaration and a definition file.
//! - **Subsetting** ([`subset`]): an icon font is first cut down to the glyphs
//!   actually used, by handing it to an external `pyftsubset`-style tool.
//!   With the `fontations` feature, [`coverage`] checks what survived.
//! - **Shaders** ([`shaders`]): every shader file in a directory becomes a raw
//!   string constant named after the file.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use assetgen_core::embed::{write_embedded, EmbedOptions};
//! use assetgen_core::subset::{ExternalSubsetter, Subsetter};
//!
//! let font = ExternalSubsetter::default().subset(Path::new("icons.ttf"), "\u{e900}\u{e901}")?;
//! write_embedded(&font, Path::new("icons.cpp"), Path::new("icons.hpp"), &EmbedOptions::new())?;
//! # Ok::<(), assetgen_core::error::AssetError>(())
//! ```
//!
//! Everything is synchronous; the subsetter is the only thing that blocks.

#[cfg(feature = "fontations")]
pub mod coverage;
pub mod discovery;
pub mod embed;
pub mod error;
pub mod ident;
pub mod output;
pub mod shaders;
pub mod subset;
