//! Error types for the post repository

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the content layer.
///
/// A slug lookup with no match is not represented here; it is a normal
/// outcome and returned as `Ok(None)` by the repository.
#[derive(Debug, Error)]
pub enum BlogError {
    /// The configured content directory is missing or unreadable.
    #[error("content directory unavailable: {}", .0.display())]
    ContentSourceUnavailable(PathBuf),

    /// A post filename does not match the required naming convention.
    /// Under the date-prefixed convention this is fatal to the whole
    /// listing, not a skip-and-continue condition.
    #[error("invalid post filename: {0}")]
    MalformedFilename(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BlogError>;
