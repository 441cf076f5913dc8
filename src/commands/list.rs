//! List posts

use anyhow::Result;

use crate::Blog;

/// Print all posts, newest first
pub fn run(blog: &Blog) -> Result<()> {
    let posts = blog.repository().list_all_posts()?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}]",
            post.date.format("%Y-%m-%d"),
            post.title,
            post.source
        );
    }

    Ok(())
}
