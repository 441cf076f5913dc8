//! mdxblog: the content layer of an MDX blog
//!
//! This crate loads blog posts from a directory of MDX documents, parses
//! their front matter, validates filename conventions, and exposes ordered
//! listing and slug lookup, plus a projection used by a chat assistant's
//! "get blog posts" tool.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod tools;

use anyhow::Result;
use std::path::Path;

use crate::content::PostRepository;

/// The blog site rooted at a base directory
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory holding the post files
    pub content_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Build a repository over the configured content directory
    pub fn repository(&self) -> PostRepository {
        PostRepository::new(
            &self.content_dir,
            self.config.convention,
            self.config.extension.clone(),
        )
    }
}
