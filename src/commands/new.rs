//! Create a new post file

use anyhow::Result;
use std::fs;

use crate::config::NamingConvention;
use crate::Blog;

/// Scaffold a new post in the content directory, named per the active
/// filename convention.
pub fn run(blog: &Blog, title: &str) -> Result<()> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title produces an empty slug: {:?}", title);
    }

    let file_name = match blog.config.convention {
        NamingConvention::DatePrefixed => format!(
            "{}-{}.{}",
            now.format("%Y-%m-%d"),
            slug,
            blog.config.extension
        ),
        NamingConvention::Bare => format!("{}.{}", slug, blog.config.extension),
    };

    fs::create_dir_all(&blog.content_dir)?;
    let file_path = blog.content_dir.join(&file_name);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n",
        title,
        now.format("%Y-%m-%d")
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
