//! Show a single post by slug

use anyhow::Result;

use crate::content::MarkdownRenderer;
use crate::Blog;

/// Print one post; with `html` the body goes through the render stage.
///
/// An unknown slug is a normal outcome and prints a not-found message, it
/// is not a failure of the command.
pub fn run(blog: &Blog, slug: &str, html: bool) -> Result<()> {
    let Some(post) = blog.repository().get_post_by_slug(slug)? else {
        println!("Post not found: {}", slug);
        return Ok(());
    };

    println!("Title:       {}", post.title);
    println!("Date:        {}", post.date.format("%Y-%m-%d"));
    println!("Description: {}", post.display_description());
    println!("URL:         {}", post.url(&blog.config.root));
    println!();

    if html {
        let renderer = MarkdownRenderer::new();
        println!("{}", renderer.render(&post.content)?);
    } else {
        println!("{}", post.content);
    }

    Ok(())
}
