//! Content loader - picks the latest post from the posts directory

use std::fs;
use std::path::{Path, PathBuf};

use super::Post;
use crate::error::Error;

/// Locates and loads the post to normalize
pub struct ContentLoader {
    posts_dir: PathBuf,
}

impl ContentLoader {
    /// Create a loader for a posts directory
    pub fn new<P: Into<PathBuf>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    /// Path of the latest post
    pub fn latest_path(&self) -> Result<PathBuf, Error> {
        let name = select_latest(&self.posts_dir)?;
        Ok(self.posts_dir.join(name))
    }

    /// Load the latest post
    pub fn load_latest(&self) -> Result<Post, Error> {
        let path = self.latest_path()?;
        tracing::debug!("Selected latest post {:?}", path);
        Post::load(path)
    }
}

/// Name of the last entry in the posts directory listing
///
/// Entries are listed in file name order and nothing is filtered out, so a
/// stray sub-directory or dotfile that sorts last is selected too. Post names
/// start with their date, which is what makes the last entry the latest post.
pub fn select_latest(dir: &Path) -> Result<String, Error> {
    let list_err = |source: std::io::Error| Error::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    names.sort();
    tracing::debug!("Listed {} entries in {:?}", names.len(), dir);

    pick_last(names).ok_or_else(|| Error::NoPosts(dir.to_path_buf()))
}

/// Positional selection: the last name wins, whatever it is
pub fn pick_last<I>(names: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    names.into_iter().last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_last_is_positional() {
        let names = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(pick_last(names), Some("b".to_string()));

        let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(pick_last(names), Some("c".to_string()));
    }

    #[test]
    fn test_pick_last_empty() {
        assert_eq!(pick_last(Vec::<String>::new()), None);
    }

    #[test]
    fn test_select_latest_ignores_mtime() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2024-03-01-c.md"), "c").unwrap();
        fs::write(dir.path().join("2024-01-01-a.md"), "a").unwrap();
        fs::write(dir.path().join("2024-02-01-b.md"), "b").unwrap();

        assert_eq!(select_latest(dir.path()).unwrap(), "2024-03-01-c.md");
    }

    #[test]
    fn test_select_latest_does_not_filter() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2024-01-01-a.md"), "a").unwrap();
        fs::create_dir(dir.path().join("zz-assets")).unwrap();

        assert_eq!(select_latest(dir.path()).unwrap(), "zz-assets");
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = select_latest(dir.path()).unwrap_err();
        assert!(matches!(err, Error::NoPosts(ref p) if p == dir.path()));
        assert!(err.to_string().starts_with("No files found"));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = select_latest(&dir.path().join("_posts")).unwrap_err();
        assert!(matches!(err, Error::ListDir { .. }));
    }

    #[test]
    fn test_load_latest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2024-01-01-old.md"), "old").unwrap();
        fs::write(dir.path().join("2024-06-01-new.md"), "new").unwrap();

        let loader = ContentLoader::new(dir.path());
        let post = loader.load_latest().unwrap();
        assert_eq!(post.name, "2024-06-01-new.md");
        assert_eq!(post.raw, "new");
    }
}
