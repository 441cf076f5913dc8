//! `get_blog_posts` - the chat assistant's blog lookup tool
//!
//! The assistant runtime registers this as a callable tool; the payload
//! shapes here are what the chat UI renders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::PostRepository;
use crate::error::Result;

/// Description string used when registering the tool with the model
pub const TOOL_DESCRIPTION: &str =
    "Get blog posts. Can fetch most recent post or multiple posts with limit";

/// A post projected for assistant display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostSummary {
    pub title: String,
    pub slug: String,
    pub date: NaiveDate,
    pub description: String,
    pub url: String,
}

/// Tool invocation result, tagged so the payload carries its own shape:
/// `{"type": "single" | "multiple" | "error", ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlogPostsResult {
    Single { post: PostSummary },
    Multiple { posts: Vec<PostSummary> },
    Error { message: String },
}

/// Execute the tool.
///
/// Without `limit` the single most recent post is returned; with `limit`
/// (positive) up to that many, newest first. An empty repository yields an
/// explicit error payload rather than an empty list. Fatal repository
/// errors propagate unmodified.
pub fn get_blog_posts(
    repo: &PostRepository,
    root: &str,
    limit: Option<usize>,
) -> Result<BlogPostsResult> {
    let posts = repo.list_all_posts()?;

    if posts.is_empty() {
        return Ok(BlogPostsResult::Error {
            message: "No blog posts found".to_string(),
        });
    }

    let mut summaries = posts.into_iter().map(|post| PostSummary {
        title: post.title.clone(),
        slug: post.slug.clone(),
        date: post.date,
        description: post.display_description(),
        url: post.url(root),
    });

    match limit {
        None => Ok(BlogPostsResult::Single {
            // Non-empty is checked above
            post: summaries.next().unwrap(),
        }),
        Some(limit) => Ok(BlogPostsResult::Multiple {
            posts: summaries.take(limit).collect(),
        }),
    }
}
