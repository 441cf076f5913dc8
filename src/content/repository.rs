//! Post repository - loads, validates, and orders posts from the content directory

use chrono::{DateTime, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::config::NamingConvention;
use crate::error::{BlogError, Result};

lazy_static! {
    /// Stem of a date-prefixed filename: `YYYY-MM-DD-<slug>`
    static ref DATE_PREFIXED: Regex = Regex::new(r"^(\d{4}-\d{2}-\d{2})-(.+)$").unwrap();
}

/// Maps the content directory onto validated, ordered [`Post`] records.
///
/// Every operation re-reads the file system; posts are never cached, so
/// there is no invalidation problem and concurrent readers need no
/// coordination.
pub struct PostRepository {
    content_dir: PathBuf,
    convention: NamingConvention,
    extension: String,
}

impl PostRepository {
    /// Create a repository over an explicit content directory
    pub fn new<P: Into<PathBuf>>(
        content_dir: P,
        convention: NamingConvention,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            content_dir: content_dir.into(),
            convention,
            extension: extension.into(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Load every post, newest first.
    ///
    /// Under the date-prefixed convention a single filename that fails the
    /// pattern fails the whole listing with
    /// [`BlogError::MalformedFilename`]; files without the configured
    /// extension are skipped under either convention.
    pub fn list_all_posts(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();
        for name in self.post_file_names()? {
            posts.push(self.load_post(&name)?);
        }

        // Sort by date descending; slug breaks ties so the order does not
        // depend on directory enumeration order.
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(posts)
    }

    /// Look up a single post by its slug.
    ///
    /// A missing post is a normal outcome (`Ok(None)`), rendered by
    /// callers as a not-found page rather than an error.
    pub fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let found = self.post_file_names()?.into_iter().find(|name| {
            match self.convention {
                // First match wins, matching the original suffix lookup.
                NamingConvention::DatePrefixed => {
                    name.ends_with(&format!("-{}.{}", slug, self.extension))
                }
                NamingConvention::Bare => *name == format!("{}.{}", slug, self.extension),
            }
        });

        match found {
            Some(name) => Ok(Some(self.load_post(&name)?)),
            None => Ok(None),
        }
    }

    /// Enumerate post file names in the content directory
    fn post_file_names(&self) -> Result<Vec<String>> {
        if !self.content_dir.is_dir() {
            return Err(BlogError::ContentSourceUnavailable(
                self.content_dir.clone(),
            ));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.content_dir)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && self.has_post_extension(path) {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    names.push(name.to_string());
                }
            }
        }

        Ok(names)
    }

    /// Load a single post from a file name within the content directory
    fn load_post(&self, file_name: &str) -> Result<Post> {
        let path = self.content_dir.join(file_name);
        let raw = fs::read_to_string(&path)?;
        let (fm, body) = FrontMatter::parse(&raw);

        let stem = file_name
            .strip_suffix(&format!(".{}", self.extension))
            .unwrap_or(file_name);

        let (filename_date, slug) = match self.convention {
            NamingConvention::DatePrefixed => {
                let caps = DATE_PREFIXED
                    .captures(stem)
                    .ok_or_else(|| BlogError::MalformedFilename(file_name.to_string()))?;
                let date = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d")
                    .map_err(|_| BlogError::MalformedFilename(file_name.to_string()))?;
                (Some(date), caps[2].to_string())
            }
            NamingConvention::Bare => (None, stem.to_string()),
        };

        // Front matter wins over the filename prefix. Bare filenames carry
        // no date at all, so fall back to file mtime, then today.
        let date = fm
            .parse_date()
            .or(filename_date)
            .or_else(|| file_modified_date(&path))
            .unwrap_or_else(|| Local::now().date_naive());

        // A missing title is a content defect; it surfaces as an empty
        // string rather than failing the load.
        let title = fm.title.unwrap_or_default();

        Ok(Post {
            slug,
            title,
            date,
            content: body.to_string(),
            description: fm.description,
            source: file_name.to_string(),
        })
    }

    fn has_post_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.extension)
            .unwrap_or(false)
    }
}

/// Modification date of a file, when available
fn file_modified_date(path: &Path) -> Option<NaiveDate> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Local>::from(modified).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    fn strict_repo(dir: &TempDir) -> PostRepository {
        PostRepository::new(dir.path(), NamingConvention::DatePrefixed, "mdx")
    }

    #[test]
    fn test_round_trip_parse() {
        let dir = TempDir::new().unwrap();
        write_post(
            &dir,
            "2024-01-21-hello-world.mdx",
            "---\ntitle: T\ndate: 2024-01-21\ndescription: D\n---\nHello",
        );

        let posts = strict_repo(&dir).list_all_posts().unwrap();
        assert_eq!(posts.len(), 1);

        let post = &posts[0];
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "T");
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2024, 1, 21).unwrap());
        assert_eq!(post.description.as_deref(), Some("D"));
        assert_eq!(post.content, "Hello");
    }

    #[test]
    fn test_sorted_newest_first() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "2024-01-01-oldest.mdx", "---\ntitle: A\n---\nx");
        write_post(&dir, "2024-03-01-newest.mdx", "---\ntitle: B\n---\nx");
        write_post(&dir, "2024-02-01-middle.mdx", "---\ntitle: C\n---\nx");

        let posts = strict_repo(&dir).list_all_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "oldest"]);

        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_date_tie_broken_by_slug() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "2024-01-01-beta.mdx", "---\ntitle: B\n---\nx");
        write_post(&dir, "2024-01-01-alpha.mdx", "---\ntitle: A\n---\nx");

        let posts = strict_repo(&dir).list_all_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_filename_date_fallback() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "2024-03-01-no-date.mdx", "---\ntitle: T\n---\nx");

        let posts = strict_repo(&dir).list_all_posts().unwrap();
        assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_front_matter_date_wins() {
        let dir = TempDir::new().unwrap();
        write_post(
            &dir,
            "2024-03-01-override.mdx",
            "---\ntitle: T\ndate: 2024-06-15\n---\nx",
        );

        let posts = strict_repo(&dir).list_all_posts().unwrap();
        assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }

    #[test]
    fn test_malformed_filename_fails_listing() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "2024-01-01-good.mdx", "---\ntitle: G\n---\nx");
        write_post(&dir, "helloworld.mdx", "---\ntitle: Bad\n---\nx");

        let err = strict_repo(&dir).list_all_posts().unwrap_err();
        assert!(matches!(err, BlogError::MalformedFilename(name) if name == "helloworld.mdx"));
    }

    #[test]
    fn test_other_extensions_skipped() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "2024-01-01-post.mdx", "---\ntitle: P\n---\nx");
        write_post(&dir, "notes.txt", "not a post");
        write_post(&dir, "README.md", "also not a post");

        let posts = strict_repo(&dir).list_all_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "post");
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let repo = PostRepository::new(
            dir.path().join("does-not-exist"),
            NamingConvention::DatePrefixed,
            "mdx",
        );

        assert!(matches!(
            repo.list_all_posts().unwrap_err(),
            BlogError::ContentSourceUnavailable(_)
        ));
        assert!(matches!(
            repo.get_post_by_slug("anything").unwrap_err(),
            BlogError::ContentSourceUnavailable(_)
        ));
    }

    #[test]
    fn test_get_post_by_slug() {
        let dir = TempDir::new().unwrap();
        write_post(
            &dir,
            "2024-01-21-hello-world.mdx",
            "---\ntitle: T\n---\nHello",
        );

        let repo = strict_repo(&dir);
        let post = repo.get_post_by_slug("hello-world").unwrap().unwrap();
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.title, "T");

        assert!(repo.get_post_by_slug("does-not-exist").unwrap().is_none());
    }

    #[test]
    fn test_lookup_round_trips_listing() {
        let dir = TempDir::new().unwrap();
        write_post(
            &dir,
            "2024-01-01-first.mdx",
            "---\ntitle: First\ndate: 2024-01-01\n---\nbody one",
        );
        write_post(
            &dir,
            "2024-02-01-second.mdx",
            "---\ntitle: Second\ndate: 2024-02-01\n---\nbody two",
        );

        let repo = strict_repo(&dir);
        for listed in repo.list_all_posts().unwrap() {
            let found = repo.get_post_by_slug(&listed.slug).unwrap().unwrap();
            assert_eq!(found.title, listed.title);
            assert_eq!(found.date, listed.date);
            assert_eq!(found.content, listed.content);
        }
    }

    #[test]
    fn test_bare_convention() {
        let dir = TempDir::new().unwrap();
        write_post(
            &dir,
            "hello-world.mdx",
            "---\ntitle: T\ndate: 2024-01-21\n---\nHello",
        );

        let repo = PostRepository::new(dir.path(), NamingConvention::Bare, "mdx");
        let posts = repo.list_all_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "hello-world");
        assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2024, 1, 21).unwrap());

        let post = repo.get_post_by_slug("hello-world").unwrap().unwrap();
        assert_eq!(post.title, "T");
    }

    #[test]
    fn test_bare_date_falls_back_to_mtime() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "undated.mdx", "---\ntitle: T\n---\nx");

        let repo = PostRepository::new(dir.path(), NamingConvention::Bare, "mdx");
        let posts = repo.list_all_posts().unwrap();

        // No front-matter date and no filename prefix under the bare
        // convention, so the date comes from the file's mtime. The file
        // was just written, so that is today.
        assert_eq!(posts[0].date, Local::now().date_naive());
    }

    #[test]
    fn test_missing_title_is_empty() {
        let dir = TempDir::new().unwrap();
        write_post(&dir, "2024-01-01-untitled.mdx", "no front matter here");

        let posts = strict_repo(&dir).list_all_posts().unwrap();
        assert_eq!(posts[0].title, "");
        assert_eq!(posts[0].content, "no front matter here");
    }
}
