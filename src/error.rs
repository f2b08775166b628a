//! Crate-wide error type.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("either --audible-dir or KAUDIOBOOKS_AUDIBLE_DIR must be set")]
    MissingAudibleDir,

    #[error("failed to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to access tags of {}: {source}", path.display())]
    Tag {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },

    #[error("refusing to rename {} over existing {}", from.display(), to.display())]
    TargetExists { from: PathBuf, to: PathBuf },

    #[error("failed to run `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{tool}` exited with {status}")]
    ToolFailed {
        tool: String,
        status: std::process::ExitStatus,
    },

    #[error("audiobook `{0}` does not exist. Download it first.")]
    NotDownloaded(String),

    #[error("failed to parse library export: {0}")]
    LibraryExport(#[from] serde_json::Error),

    #[error("not a valid date or datetime: '{0}'")]
    InvalidDate(String),

    #[error("change #{index} failed after {applied} applied: {source}")]
    Apply {
        index: usize,
        applied: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to start conversion workers: {0}")]
    Workers(#[from] rayon::ThreadPoolBuildError),

    #[error("{failed} of {total} conversions failed")]
    Conversions { failed: usize, total: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
