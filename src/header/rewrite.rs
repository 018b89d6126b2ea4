//! First-line header rewriting

use super::{CommentStyle, HeaderError};
use crate::shared::paths::normalize_separators;

/// Result of rewriting one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// New file content
    pub content: String,
    /// Always true once a header was produced, even when the replaced line
    /// was already identical; compare `content` to detect a no-op
    pub changed: bool,
    /// Whether the first line was recognised as an existing header
    pub replaced_existing: bool,
}

/// Insert or replace the path header of `content`
///
/// Fails with [`HeaderError::UnsupportedStyle`] before looking at the content
/// when `style` has no usable comment form.
pub fn rewrite(
    content: &str,
    relative_path: &str,
    style: &CommentStyle,
    prefix: &str,
) -> Result<Rewrite, HeaderError> {
    let header = style.header_line(prefix, &normalize_separators(relative_path))?;

    if content.is_empty() {
        return Ok(Rewrite {
            content: header,
            changed: true,
            replaced_existing: false,
        });
    }

    let (first_line, rest) = match content.split_once('\n') {
        Some((first_line, rest)) => (first_line, Some(rest)),
        None => (content, None),
    };

    if style.is_header(first_line, prefix) {
        // Only a header line terminated by '\n' is replaced
        let content = match rest {
            Some(rest) => {
                let mut replaced = header;
                replaced.push_str(rest);
                replaced
            }
            None => content.to_string(),
        };
        return Ok(Rewrite {
            content,
            changed: true,
            replaced_existing: true,
        });
    }

    let mut inserted = header;
    inserted.push_str(content);
    Ok(Rewrite {
        content: inserted,
        changed: true,
        replaced_existing: false,
    })
}
