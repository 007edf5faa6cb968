//! dev-chars: tidy up the latest blog post before publishing
//!
//! Finds the newest post in a site's posts directory, reports typographic
//! quotes, absolute links to the production blog and miscapitalized product
//! names, and rewrites the post in place once the author confirms.

pub mod commands;
pub mod config;
pub mod content;
mod error;
pub mod normalize;
pub mod prompt;

pub use error::Error;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The site being worked on
#[derive(Debug, Clone)]
pub struct DevChars {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the posts
    pub posts_dir: PathBuf,
}

impl DevChars {
    /// Create a new instance from a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = config.posts_path(&base_dir);
        tracing::debug!("Posts directory: {:?}", posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Read posts from an explicit directory instead of the configured one
    pub fn with_posts_dir<P: Into<PathBuf>>(mut self, posts_dir: P) -> Self {
        self.posts_dir = posts_dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_layout() {
        let dir = tempfile::tempdir().unwrap();
        let app = DevChars::new(dir.path()).unwrap();
        assert_eq!(app.posts_dir, dir.path().join("_source").join("_posts"));
        assert_eq!(app.config.blog_host, "developer.okta.com");
    }

    #[test]
    fn test_reads_site_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "source: site\nblog_host: blog.example.com\n",
        )
        .unwrap();

        let app = DevChars::new(dir.path()).unwrap();
        assert_eq!(app.posts_dir, dir.path().join("site").join("_posts"));
        assert_eq!(app.config.blog_host, "blog.example.com");
    }

    #[test]
    fn test_malformed_site_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "source: [oops").unwrap();
        assert!(DevChars::new(dir.path()).is_err());
    }

    #[test]
    fn test_posts_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        let app = DevChars::new(dir.path())
            .unwrap()
            .with_posts_dir(dir.path().join("drafts"));
        assert_eq!(app.posts_dir, dir.path().join("drafts"));
    }
}
