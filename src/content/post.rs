//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier, derived from the filename
    pub slug: String,

    /// Post title, sourced from front matter
    pub title: String,

    /// Publication date
    pub date: NaiveDate,

    /// Document body with front matter stripped (unrendered)
    pub content: String,

    /// Optional summary from front matter
    pub description: Option<String>,

    /// Source file name
    pub source: String,
}

impl Post {
    /// The description, falling back to `Read {title}` when absent
    pub fn display_description(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("Read {}", self.title))
    }

    /// URL path for this post under the given root, e.g. `/blog/hello-world`
    pub fn url(&self, root: &str) -> String {
        format!("{}/{}", root.trim_end_matches('/'), self.slug)
    }
}
