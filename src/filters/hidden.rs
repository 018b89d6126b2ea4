//! Hidden file filtering

use super::{Candidate, Filter, FilterDecision};

/// Dot-prefixed names are hidden
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Skips candidates with any hidden segment in their relative path
pub struct HiddenFilter;

impl Filter for HiddenFilter {
    fn filter(&self, candidate: &Candidate<'_>) -> FilterDecision {
        if candidate.relative.split('/').any(is_hidden) {
            FilterDecision::Skip("hidden file")
        } else {
            FilterDecision::Process
        }
    }

    fn name(&self) -> &'static str {
        "HiddenFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_hidden_detection() {
        assert!(is_hidden(".hidden"));
        assert!(is_hidden(".git"));
        assert!(is_hidden(".gitignore"));
        assert!(is_hidden(".."));
        assert!(!is_hidden("normal.txt"));
        assert!(!is_hidden("file"));
    }

    #[test]
    fn test_hidden_filter_checks_every_segment() {
        let nested = Candidate::new(Path::new("/p/.git/config"), ".git/config");
        let dotfile = Candidate::new(Path::new("/p/src/.env"), "src/.env");
        let visible = Candidate::new(Path::new("/p/src/env.rs"), "src/env.rs");

        assert_eq!(HiddenFilter.filter(&nested), FilterDecision::Skip("hidden file"));
        assert_eq!(HiddenFilter.filter(&dotfile), FilterDecision::Skip("hidden file"));
        assert_eq!(HiddenFilter.filter(&visible), FilterDecision::Process);
    }
}
