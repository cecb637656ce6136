//! Source file discovery for assetgen-core

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AssetError, Result};

/// Path to a candidate source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub path: PathBuf,
}

/// Trait for enumerating embeddable sources from some backing store.
pub trait SourceDiscovery {
    fn discover(&self) -> Result<Vec<SourceRef>>;
}

/// Directory walker that collects files by extension, sorted by name.
#[derive(Debug, Clone)]
pub struct DirDiscovery {
    root: PathBuf,
    extensions: Vec<String>,
    recursive: bool,
    follow_symlinks: bool,
}

impl DirDiscovery {
    pub fn new<I, S>(root: impl Into<PathBuf>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        Self {
            root: root.into(),
            extensions,
            recursive: false,
            follow_symlinks: false,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

impl SourceDiscovery for DirDiscovery {
    fn discover(&self) -> Result<Vec<SourceRef>> {
        if !self.root.is_dir() {
            return Err(AssetError::MissingDir(self.root.clone()));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name();

        let mut found = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                AssetError::io("scan", path, e.into())
            })?;
            if entry.file_type().is_file() && has_extension(entry.path(), &self.extensions) {
                found.push(SourceRef {
                    path: entry.path().to_path_buf(),
                });
            }
        }

        Ok(found)
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return false,
    };

    extensions.iter().any(|e| *e == ext)
}
