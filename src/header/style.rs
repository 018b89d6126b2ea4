//! Comment style descriptors

use super::HeaderError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which comment form a file type prefers for its header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentForm {
    #[default]
    Line,
    Block,
}

impl fmt::Display for CommentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentForm::Line => f.write_str("line"),
            CommentForm::Block => f.write_str("block"),
        }
    }
}

/// How comments are written for one file type
///
/// Field names follow the JSON configuration document
/// (`LineComment`, `BlockCommentStart`, `BlockCommentEnd`, `Preferred`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CommentStyle {
    /// Single-line comment token, e.g. `//` or `#`
    pub line_comment: String,
    /// Block comment opener, e.g. `/*`
    pub block_comment_start: String,
    /// Block comment closer, e.g. `*/`
    pub block_comment_end: String,
    /// Preferred form for the header
    pub preferred: CommentForm,
}

impl CommentStyle {
    /// Line-comment style with no block delimiters
    pub fn line(token: &str) -> Self {
        Self {
            line_comment: token.to_string(),
            ..Self::default()
        }
    }

    /// Block-comment style with no line token
    pub fn block(start: &str, end: &str) -> Self {
        Self {
            block_comment_start: start.to_string(),
            block_comment_end: end.to_string(),
            preferred: CommentForm::Block,
            ..Self::default()
        }
    }

    /// Add block delimiters while keeping the preferred form
    pub fn with_block(mut self, start: &str, end: &str) -> Self {
        self.block_comment_start = start.to_string();
        self.block_comment_end = end.to_string();
        self
    }

    fn has_line_form(&self) -> bool {
        !self.line_comment.is_empty()
    }

    fn has_block_form(&self) -> bool {
        !self.block_comment_start.is_empty() && !self.block_comment_end.is_empty()
    }

    /// Form actually used for the header
    ///
    /// A usable preferred line form wins; otherwise both block delimiters are
    /// required.
    pub fn effective_form(&self) -> Result<CommentForm, HeaderError> {
        if self.preferred == CommentForm::Line && self.has_line_form() {
            Ok(CommentForm::Line)
        } else if self.has_block_form() {
            Ok(CommentForm::Block)
        } else {
            Err(HeaderError::UnsupportedStyle {
                preferred: self.preferred,
            })
        }
    }

    /// Canonical header line, newline included
    pub fn header_line(&self, prefix: &str, relative_path: &str) -> Result<String, HeaderError> {
        let text = format!("{prefix}{relative_path}");
        match self.effective_form()? {
            CommentForm::Line => Ok(format!("{} {}\n", self.line_comment, text)),
            CommentForm::Block => Ok(format!(
                "{} {} {}\n",
                self.block_comment_start, text, self.block_comment_end
            )),
        }
    }

    /// Substring test for an existing path header
    ///
    /// True when the line contains the prefix together with either the line
    /// token or the block opener. An empty token is contained in every line,
    /// so a style missing one form accepts any line holding the prefix.
    pub fn is_header(&self, line: &str, prefix: &str) -> bool {
        line.contains(prefix)
            && (line.contains(self.line_comment.as_str())
                || line.contains(self.block_comment_start.as_str()))
    }
}
