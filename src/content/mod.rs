//! Content module - post model, front matter, repository, and rendering

mod frontmatter;
mod markdown;
mod post;
pub mod repository;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::Post;
pub use repository::PostRepository;
