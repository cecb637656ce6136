//! Error type shared by every assetgen-core operation

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch subsetter `{program}`")]
    SubsetterSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("subsetter `{program}` failed with {status}")]
    SubsetterFailed { program: String, status: ExitStatus },

    #[error("subset text is empty")]
    EmptySubset,

    #[error("not a valid C identifier: {0:?}")]
    InvalidIdent(String),

    #[error(
        "symbol `{symbol}` is produced by both {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateSymbol {
        symbol: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{} contains the raw string terminator `{terminator}`", .path.display())]
    DelimiterCollision {
        path: PathBuf,
        terminator: String,
    },

    #[error("shader directory does not exist: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("malformed definition: {0}")]
    MalformedDefinition(String),

    #[error("subset output is not a readable font: {0}")]
    InvalidFont(String),

    #[error("failed to encode report")]
    Report(#[from] serde_json::Error),
}

impl AssetError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        AssetError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = AssetError> = std::result::Result<T, E>;
