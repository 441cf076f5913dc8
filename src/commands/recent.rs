//! Run the assistant tool contract and print its JSON payload

use anyhow::Result;

use crate::tools;
use crate::Blog;

/// Print the `get_blog_posts` tool payload for the given limit
pub fn run(blog: &Blog, limit: Option<usize>) -> Result<()> {
    let repo = blog.repository();
    let result = tools::get_blog_posts(&repo, &blog.config.root, limit)?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
