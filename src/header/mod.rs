//! Path header insertion and replacement
//!
//! The header is a single first-line comment naming the file's path relative
//! to the project root:
//!
//! ```text
//! // File: src/app/main.go
//! <!-- File: site/index.html -->
//! ```
//!
//! Only the first line of a file is ever inspected or replaced.

pub mod rewrite;
pub mod style;

pub use rewrite::{Rewrite, rewrite};
pub use style::{CommentForm, CommentStyle};

/// Default literal placed before the path
pub const DEFAULT_COMMENT_PREFIX: &str = "File: ";

/// Errors produced while building a header
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// The descriptor lacks the tokens its comment form needs
    #[error("unsupported comment style: no usable {preferred} comment tokens")]
    UnsupportedStyle { preferred: CommentForm },
}
