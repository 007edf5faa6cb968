//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::normalize::DEFAULT_BLOG_HOST;

/// Settings read from the blog's `_config.yml`
///
/// Only the keys that locate posts and identify the production host are
/// used. Everything else the site generator keeps in the same file lands in
/// `extra` and is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Source directory, relative to the site root
    #[serde(alias = "source_dir")]
    pub source: String,
    /// Posts directory, relative to the source directory
    pub posts_dir: String,
    /// Production host whose absolute blog links get rewritten
    pub blog_host: String,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source: "_source".to_string(),
            posts_dir: "_posts".to_string(),
            blog_host: DEFAULT_BLOG_HOST.to_string(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Could not parse config {:?}", path))
    }

    /// Parse configuration from YAML text
    ///
    /// An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(content)?;
        if config.blog_host.trim().is_empty() {
            tracing::warn!("blog_host is empty, falling back to the default host");
            return Ok(Self {
                blog_host: Self::default().blog_host,
                ..config
            });
        }
        Ok(config)
    }

    /// Resolve the posts directory below a site root
    pub fn posts_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.source).join(&self.posts_dir)
    }
}
