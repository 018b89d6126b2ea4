//! Built-in comment styles
//!
//! Hardcoded extension table used when the configuration does not override
//! a file type. Keys are lowercased extensions with their leading dot.

use crate::header::CommentStyle;
use std::collections::BTreeMap;

/// Extensions commented with `//` and `/* */`
const C_FAMILY: &[&str] = &[
    ".c", ".cpp", ".cs", ".go", ".h", ".hpp", ".java", ".js", ".jsx", ".kt", ".php", ".rs",
    ".swift", ".ts", ".tsx",
];

/// Extensions commented with `#` only
const HASH_COMMENTED: &[&str] = &[".conf", ".pl", ".ps1", ".sh", ".toml", ".yaml", ".yml"];

/// Get the built-in extension to comment style table
pub fn builtin_file_types() -> BTreeMap<String, CommentStyle> {
    let mut types = BTreeMap::new();

    for ext in C_FAMILY {
        types.insert(ext.to_string(), CommentStyle::line("//").with_block("/*", "*/"));
    }
    for ext in HASH_COMMENTED {
        types.insert(ext.to_string(), CommentStyle::line("#"));
    }

    // Scripting languages with their own block syntax
    types.insert(".py".to_string(), CommentStyle::line("#").with_block("'''", "'''"));
    types.insert(".rb".to_string(), CommentStyle::line("#").with_block("=begin", "=end"));
    types.insert(".lua".to_string(), CommentStyle::line("--").with_block("--[[", "--]]"));
    types.insert(".ini".to_string(), CommentStyle::line(";"));

    // Markup and stylesheets only have block comments
    types.insert(".html".to_string(), CommentStyle::block("<!--", "-->"));
    types.insert(".xml".to_string(), CommentStyle::block("<!--", "-->"));
    types.insert(".css".to_string(), CommentStyle::block("/*", "*/"));

    types
}

/// Normalize a file-type key to lowercase with a leading dot
pub fn normalize_extension(key: &str) -> String {
    let key = key.trim().to_lowercase();
    if key.starts_with('.') {
        key
    } else {
        format!(".{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::CommentForm;

    #[test]
    fn test_builtin_comment_styles() {
        let types = builtin_file_types();
        let cases = [
            (".go", CommentForm::Line, "//"),
            (".cs", CommentForm::Line, "//"),
            (".js", CommentForm::Line, "//"),
            (".py", CommentForm::Line, "#"),
            (".html", CommentForm::Block, ""),
            (".yml", CommentForm::Line, "#"),
            (".ini", CommentForm::Line, ";"),
            (".lua", CommentForm::Line, "--"),
        ];

        for (ext, form, token) in cases {
            let style = types.get(ext).unwrap_or_else(|| panic!("missing {ext}"));
            assert_eq!(style.preferred, form, "{ext}");
            assert_eq!(style.line_comment, token, "{ext}");
            assert!(style.effective_form().is_ok(), "{ext} must be usable");
        }

        assert!(!types.contains_key(".unknown"));
        assert!(!types.contains_key(".md"));
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".GO"), ".go");
        assert_eq!(normalize_extension("custom"), ".custom");
        assert_eq!(normalize_extension(" .Rs "), ".rs");
    }
}
