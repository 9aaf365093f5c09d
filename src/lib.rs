//! devfolio: content layer of a personal blog and project showcase
//!
//! Reads markdown content files with YAML front-matter, validates them
//! against the post and project schemas, and answers the queries the site's
//! pages need: sorted previews, topic lists, lookups by slug, every
//! addressable slug, and a table of contents per article.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod toc;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::ContentIndex;
pub use error::{ContentError, FieldError, ValidationError};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The site: configuration plus the location of its content
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root (posts and projects live below it)
    pub content_dir: PathBuf,
}

impl Site {
    /// Open the site rooted at a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// A fresh index over the site's content
    pub fn index(&self) -> ContentIndex {
        ContentIndex::from_config(&self.base_dir, &self.config)
    }
}
