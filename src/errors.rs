use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for everything that can go wrong between reading the conformer
/// string and replacing the container file on disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(
        "expected a structure and a coordinate token separated by a space, \
         found {found} token(s). was the string enclosed in single quotes?"
    )]
    MalformedInput { found: usize },

    #[error("it was impossible to write file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to render the container: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to load config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
