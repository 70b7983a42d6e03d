//! Application error types

use std::path::PathBuf;

/// Error reading a project descriptor
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parse error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("Unexpected root element '{element}', expected 'project'")]
    UnexpectedRoot { element: String },

    #[error("Descriptor has no root element")]
    Empty,
}

impl ParseError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
