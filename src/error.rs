//! Error types for rs-opengraph.
//!
//! Only configuration problems, the content-type gate and structural tree
//! problems are errors. Missing or malformed Open Graph values never are.

/// Error type for parse operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source URL was required but none was given.
    #[error("no URL given yet")]
    NoUrl,

    /// The fetched document is not HTML.
    #[error("content type must be text/html, got {0:?}")]
    UnsupportedContentType(String),

    /// The document tree is malformed in a way the walk cannot recover from.
    #[error("malformed document tree: {0}")]
    Structure(String),
}

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
