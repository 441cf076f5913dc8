//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Filename convention in force for the content directory.
///
/// Exactly one convention applies per deployment; the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// `YYYY-MM-DD-<slug>.<ext>`: the date prefix is the fallback date,
    /// the remainder is the slug. Non-matching filenames are rejected.
    DatePrefixed,
    /// `<slug>.<ext>`: the stem is the slug, and the date must come from
    /// front matter.
    Bare,
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    /// URL prefix under which posts are served, e.g. `/blog`.
    pub root: String,

    // Content
    /// Content directory, relative to the site base directory.
    pub content_dir: String,
    /// Post file extension (without the dot).
    pub extension: String,
    pub convention: NamingConvention,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/blog".to_string(),

            content_dir: "content/blog".to_string(),
            extension: "mdx".to_string(),
            convention: NamingConvention::DatePrefixed,

            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.content_dir, "content/blog");
        assert_eq!(config.extension, "mdx");
        assert_eq!(config.root, "/blog");
        assert_eq!(config.convention, NamingConvention::DatePrefixed);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Portfolio
author: Jane
root: /posts
content_dir: content/posts
extension: md
convention: bare
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Portfolio");
        assert_eq!(config.root, "/posts");
        assert_eq!(config.extension, "md");
        assert_eq!(config.convention, NamingConvention::Bare);
        assert!(config.extra.is_empty());
    }
}
