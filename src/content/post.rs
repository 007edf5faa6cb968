//! Post model

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// A post file held in memory between read and write-back
#[derive(Debug, Clone)]
pub struct Post {
    /// File name as listed in the posts directory
    pub name: String,

    /// Full path of the file
    pub full_source: PathBuf,

    /// Raw text of the file
    pub raw: String,
}

impl Post {
    /// Read a post file as UTF-8 text
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            name,
            full_source: path.to_path_buf(),
            raw,
        })
    }

    /// Overwrite the file with new contents
    pub fn save(&self, contents: &str) -> Result<(), Error> {
        fs::write(&self.full_source, contents).map_err(|source| Error::Write {
            path: self.full_source.clone(),
            source,
        })
    }
}
