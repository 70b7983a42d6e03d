//! Errors surfaced to the host while reading a descriptor

use std::path::PathBuf;

use reactorver_core::application::errors::ParseError;
use reactorver_core::config::ConfigLoadError;

use crate::domain::SessionError;

/// Session registry failure
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Session property '{key}' is missing although the build session was initialized")]
    MissingSession { key: &'static str },

    #[error("Cannot restore session from property '{key}': {source}")]
    Restore {
        key: &'static str,
        #[source]
        source: SessionError,
    },

    #[error("Cannot store session into property '{key}': {source}")]
    Store {
        key: &'static str,
        #[source]
        source: SessionError,
    },
}

/// Fatal error of a descriptor read
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Cannot load configuration while processing {path}: {source}")]
    Configuration {
        path: PathBuf,
        #[source]
        source: ConfigLoadError,
    },

    #[error("Cannot serialize session after processing {path}: {source}")]
    SessionEncoding {
        path: PathBuf,
        #[source]
        source: RegistryError,
    },

    #[error("Inconsistent session state while processing {path}: {source}")]
    Session {
        path: PathBuf,
        #[source]
        source: SessionError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Cannot read descriptor: {0}")]
    Read(#[from] ParseError),
}
