//! Error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while locating, reading or rewriting a post
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not list posts directory {path:?}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No files found in {0:?}")]
    NoPosts(PathBuf),

    #[error("Could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid blog host pattern: {0}")]
    Pattern(#[from] regex::Error),
}
