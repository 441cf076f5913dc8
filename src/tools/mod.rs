//! Assistant tool layer - projections of the repository for tool calls

mod blog_posts;

pub use blog_posts::{get_blog_posts, BlogPostsResult, PostSummary, TOOL_DESCRIPTION};
